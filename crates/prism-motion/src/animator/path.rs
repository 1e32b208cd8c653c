//! Piecewise-linear motion paths sampled by arc length.

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Polyline {
    points: Vec<Vec<f32>>,
    /// Cumulative distance at each point; `lengths[0] == 0`.
    lengths: Vec<f32>,
}

impl Polyline {
    pub(crate) fn new(points: Vec<Vec<f32>>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += distance(&points[i - 1], point);
            }
            lengths.push(total);
        }
        Self { points, lengths }
    }

    /// Position at fraction `t` of the total length.
    pub(crate) fn sample(&self, t: f32) -> Vec<f32> {
        let total = self.lengths.last().copied().unwrap_or(0.0);
        let Some(last) = self.points.last() else {
            return Vec::new();
        };
        if self.points.len() == 1 || total <= 0.0 {
            return last.clone();
        }

        let d = t.clamp(0.0, 1.0) * total;
        let i = self
            .lengths
            .partition_point(|&l| l <= d)
            .saturating_sub(1)
            .min(self.points.len() - 2);
        let seg = self.lengths[i + 1] - self.lengths[i];
        let local = if seg > 0.0 {
            (d - self.lengths[i]) / seg
        } else {
            0.0
        };
        self.points[i]
            .iter()
            .zip(&self.points[i + 1])
            .map(|(a, b)| super::lerp(*a, *b, local))
            .collect()
    }
}

fn distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (y - x) * (y - x))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_by_arc_length() {
        // Two legs: 10 units along x, then 30 units along y.
        let path = Polyline::new(vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 30.0]]);
        assert_eq!(path.sample(0.0), vec![0.0, 0.0]);
        assert_eq!(path.sample(0.25), vec![10.0, 0.0]);
        assert_eq!(path.sample(0.5), vec![10.0, 10.0]);
        assert_eq!(path.sample(1.0), vec![10.0, 30.0]);
    }

    #[test]
    fn degenerate_path_returns_last_point() {
        let path = Polyline::new(vec![vec![5.0], vec![5.0]]);
        assert_eq!(path.sample(0.7), vec![5.0]);
    }
}
