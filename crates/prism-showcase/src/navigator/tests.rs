use super::*;

fn navigator() -> Navigator {
    Navigator::new(vec![3, 1, 2])
}

fn open(nav: &mut Navigator, project: usize) {
    nav.apply(NavInput::Select {
        index: project,
        mode: SelectMode::Direct,
    });
    nav.apply(NavInput::TransitionDone);
}

#[test]
fn direct_select_opens_detail_with_effects() {
    let mut nav = navigator();
    let effects = nav.apply(NavInput::Select {
        index: 1,
        mode: SelectMode::Direct,
    });
    assert_eq!(
        nav.state(),
        NavState::DetailTransitioning {
            project: 1,
            image: 0
        }
    );
    assert_eq!(
        effects,
        vec![
            NavEffect::ShowProject(1),
            NavEffect::RecolorAccent,
            NavEffect::ReplayEntrance
        ]
    );
    nav.apply(NavInput::TransitionDone);
    assert_eq!(
        nav.state(),
        NavState::Detail {
            project: 1,
            image: 0
        }
    );
}

#[test]
fn two_step_select_previews_then_opens() {
    let mut nav = navigator();
    let tap = |index| NavInput::Select {
        index,
        mode: SelectMode::TwoStep,
    };

    assert_eq!(nav.apply(tap(0)), vec![NavEffect::Highlight(0)]);
    assert_eq!(nav.state(), NavState::Previewing(0));

    nav.apply(tap(2));
    assert_eq!(nav.state(), NavState::Previewing(2));

    let effects = nav.apply(tap(2));
    assert!(effects.contains(&NavEffect::ShowProject(2)));
    assert_eq!(nav.state().project(), Some(2));
    assert_eq!(nav.state().image(), Some(0));
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut nav = navigator();
    let effects = nav.apply(NavInput::Select {
        index: 9,
        mode: SelectMode::Direct,
    });
    assert!(effects.is_empty());
    assert_eq!(nav.state(), NavState::Grid);
}

#[test]
fn project_steps_wrap() {
    let mut nav = navigator();
    open(&mut nav, 0);

    nav.apply(NavInput::Project(Step::Prev));
    assert_eq!(nav.state().project(), Some(2));
    nav.apply(NavInput::TransitionDone);

    nav.apply(NavInput::Project(Step::Next));
    assert_eq!(nav.state().project(), Some(0));
    nav.apply(NavInput::TransitionDone);

    nav.apply(NavInput::Project(Step::Next));
    assert_eq!(nav.state().project(), Some(1));
}

#[test]
fn image_steps_wrap_within_project() {
    let mut nav = navigator();
    open(&mut nav, 0);

    let effects = nav.apply(NavInput::Image(Step::Prev));
    assert_eq!(
        effects,
        vec![NavEffect::ShowImage {
            project: 0,
            image: 2
        }]
    );
    nav.apply(NavInput::TransitionDone);
    nav.apply(NavInput::Image(Step::Next));
    assert_eq!(nav.state().image(), Some(0));
    nav.apply(NavInput::TransitionDone);

    // A single-image project stays on its only image.
    nav.apply(NavInput::Project(Step::Next));
    nav.apply(NavInput::TransitionDone);
    nav.apply(NavInput::Image(Step::Next));
    assert_eq!(nav.state().image(), Some(0));
}

#[test]
fn steps_are_ignored_while_in_flight() {
    let mut nav = navigator();
    nav.apply(NavInput::Select {
        index: 0,
        mode: SelectMode::Direct,
    });
    assert!(nav.state().is_in_flight());

    assert!(nav.apply(NavInput::Project(Step::Next)).is_empty());
    assert!(nav.apply(NavInput::Image(Step::Next)).is_empty());
    assert!(nav.apply(NavInput::HoverImage(2)).is_empty());
    assert_eq!(nav.state().project(), Some(0));
    assert_eq!(nav.state().image(), Some(0));

    nav.apply(NavInput::TransitionDone);
    nav.apply(NavInput::Project(Step::Next));
    assert_eq!(nav.state().project(), Some(1));
}

#[test]
fn close_returns_to_grid_even_mid_transition() {
    let mut nav = navigator();
    nav.apply(NavInput::Select {
        index: 0,
        mode: SelectMode::Direct,
    });
    assert_eq!(nav.apply(NavInput::Close), vec![NavEffect::ShowGrid]);
    assert_eq!(nav.state(), NavState::Grid);
}

#[test]
fn hover_thumbnail_swaps_image_without_transition() {
    let mut nav = navigator();
    open(&mut nav, 0);
    let effects = nav.apply(NavInput::HoverImage(1));
    assert_eq!(
        effects,
        vec![NavEffect::ShowImage {
            project: 0,
            image: 1
        }]
    );
    assert_eq!(
        nav.state(),
        NavState::Detail {
            project: 0,
            image: 1
        }
    );
    assert!(nav.apply(NavInput::HoverImage(1)).is_empty());
    nav.apply(NavInput::HoverImage(7));
    assert_eq!(nav.state().image(), Some(2));
}

#[test]
fn lightbox_preserves_and_restores_detail() {
    let mut nav = navigator();
    open(&mut nav, 0);
    nav.apply(NavInput::HoverImage(2));
    let before = nav.state();

    let effects = nav.apply(NavInput::OpenLightbox);
    assert_eq!(
        effects,
        vec![NavEffect::OpenLightbox {
            project: 0,
            image: 2
        }]
    );
    assert_eq!(nav.state().image(), Some(2));

    assert_eq!(nav.apply(NavInput::CloseLightbox), vec![NavEffect::CloseLightbox]);
    assert_eq!(nav.state(), before);
}

#[test]
fn lightbox_crossfade_latches_until_done() {
    let mut nav = navigator();
    open(&mut nav, 0);
    nav.apply(NavInput::OpenLightboxAt(0));

    let effects = nav.apply(NavInput::LightboxStep(Step::Prev));
    assert_eq!(
        effects,
        vec![NavEffect::CrossfadeLightbox {
            project: 0,
            image: 2,
            step: Step::Prev
        }]
    );
    assert!(nav.state().is_in_flight());
    assert!(nav.apply(NavInput::LightboxStep(Step::Next)).is_empty());
    assert_eq!(nav.state().image(), Some(2));

    nav.apply(NavInput::TransitionDone);
    nav.apply(NavInput::LightboxStep(Step::Next));
    assert_eq!(nav.state().image(), Some(0));
}

#[test]
fn closing_lightbox_mid_crossfade_keeps_new_image() {
    let mut nav = navigator();
    open(&mut nav, 0);
    nav.apply(NavInput::OpenLightbox);
    nav.apply(NavInput::LightboxStep(Step::Next));
    nav.apply(NavInput::CloseLightbox);
    assert_eq!(
        nav.state(),
        NavState::Detail {
            project: 0,
            image: 1
        }
    );
}

#[test]
fn content_replacement_clamps_indexes() {
    let mut nav = navigator();
    open(&mut nav, 2);
    nav.apply(NavInput::Image(Step::Next));
    nav.apply(NavInput::TransitionDone);
    assert_eq!(
        nav.state(),
        NavState::Detail {
            project: 2,
            image: 1
        }
    );

    nav.apply(NavInput::ContentReplaced(vec![4, 1]));
    assert_eq!(
        nav.state(),
        NavState::Detail {
            project: 1,
            image: 0
        }
    );
    assert_eq!(nav.project_count(), 2);

    let effects = nav.apply(NavInput::ContentReplaced(Vec::new()));
    assert_eq!(effects, vec![NavEffect::ShowGrid]);
    assert_eq!(nav.state(), NavState::Grid);
}

#[test]
fn grid_hover_highlights() {
    let mut nav = navigator();
    assert_eq!(nav.apply(NavInput::Hover(1)), vec![NavEffect::Highlight(1)]);
    assert!(nav.apply(NavInput::Hover(5)).is_empty());
    assert_eq!(nav.state(), NavState::Grid);
}

#[test]
fn wrap_and_clamp_helpers() {
    assert_eq!(wrap(0, -1, 4), 3);
    assert_eq!(wrap(3, 1, 4), 0);
    assert_eq!(wrap(0, 1, 1), 0);
    assert_eq!(wrap(5, 1, 0), 0);
    assert_eq!(clamp_index(5, 3), 2);
    assert_eq!(clamp_index(1, 3), 1);
    assert_eq!(clamp_index(4, 0), 0);
}
