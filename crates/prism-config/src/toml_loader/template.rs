//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# prism configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[palette]
# seed = "#ccff00"          # every palette is hue-rotated from this color
# gradient_angle = 42.0

[palette.backdrop]
# base_colors = 3           # 1-12
# max_extra_colors = 3      # 0-6
# even_chance = 0.5         # 0.0-1.0
# fade_duration = 5.0
# interval_min = 5.0
# interval_spread = 10.0

[scene.camera]
# fov = 50.0                # 10-120
# near = 0.1
# far = 20000.0
# position = [0.0, 2.0, 130.0]

[scene.fog]
# near = 1.0
# far = 450.0

[scene.reveal]
# initial_scale = 0.00002
# show_delay = 0.5
# scale_delay = 1.0
# scale_duration = 6.0

[scene.wireframe]
# size = 2000.0
# segments = 12             # 1-64
# opacity = 0.1
# spin_duration = 150.0

# [[scene.swarms]]
# amount = 5
# container = [120.0, 200.0, 50.0]
# wander_range = 250.0
# speed = 10.0

[scene.cluster]
# shape_count = 10
# bright_range = 150.0
# spin_duration = 20.0

[motion.scroll]
# camera_factor = -0.15
# rotation_factor = -0.0007
# showcase_factor = 0.13
# damping = 0.5             # 0.0-5.0
# ease = "quad.out"

[performance]
# preset = "auto"           # auto, low, medium, high
# frame_rate = 60           # 24-240

[effects]
# enabled = true

[effects.bloom]
# intensity = 1.0           # 0.0-3.0
# luminance_threshold = 0.3
# luminance_smoothing = 0.9

[showcase]
# content_dir = "content"
# shuffle = true
# video_min_width = 600.0
# narrow_viewport = 768.0

[logging]
# level = "INFO"            # TRACE, DEBUG, INFO, WARNING, ERROR
# fps_report_interval = 0
"##
    .to_string()
}
