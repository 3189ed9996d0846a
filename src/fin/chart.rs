use serde::{Deserialize, Serialize};

/// 온도 분포 차트의 한 점. x [m], T [°C].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    #[serde(rename = "T")]
    pub t: f64,
}

/// 소수 셋째 자리로 반올림한다. 정확히 절반이면 +∞ 방향으로 올린다(-0.0005 → 0).
pub fn round_position(x: f64) -> f64 {
    (x * 1000.0 + 0.5).floor() / 1000.0
}

/// x_initial부터 x_final까지(포함) x_resolution 간격으로 위치를 샘플링하는 반복자.
///
/// i번째 위치는 `x_initial + i·x_resolution`으로 직접 계산하므로 덧셈 누적 오차가 점 개수에
/// 영향을 주지 않는다. `Clone`하면 처음부터 다시 순회할 수 있다.
#[derive(Debug, Clone)]
pub struct ChartPoints<F> {
    x_initial: f64,
    x_final: f64,
    x_resolution: f64,
    step: u64,
    done: bool,
    t_of_x: F,
}

/// 온도 함수 `t_of_x`를 샘플 위치마다 평가하는 지연 반복자를 만든다.
///
/// 간격이 0 이하이거나 경계값이 유한하지 않으면 빈 반복자가 된다.
pub fn sample_positions<F>(
    x_initial: f64,
    x_final: f64,
    x_resolution: f64,
    t_of_x: F,
) -> ChartPoints<F>
where
    F: Fn(f64) -> f64,
{
    let valid = x_initial.is_finite()
        && x_final.is_finite()
        && x_resolution.is_finite()
        && x_resolution > 0.0;
    ChartPoints {
        x_initial,
        x_final,
        x_resolution,
        step: 0,
        done: !valid,
        t_of_x,
    }
}

impl<F> Iterator for ChartPoints<F>
where
    F: Fn(f64) -> f64,
{
    type Item = ChartPoint;

    fn next(&mut self) -> Option<ChartPoint> {
        if self.done {
            return None;
        }
        let x = round_position(self.x_initial + self.step as f64 * self.x_resolution);
        if x > self.x_final {
            self.done = true;
            return None;
        }
        self.step += 1;
        Some(ChartPoint {
            x,
            t: (self.t_of_x)(x),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_for_invalid_resolution() {
        assert_eq!(sample_positions(0.0, 1.0, 0.0, |x| x).count(), 0);
        assert_eq!(sample_positions(0.0, 1.0, -0.1, |x| x).count(), 0);
        assert_eq!(sample_positions(0.0, f64::NAN, 0.1, |x| x).count(), 0);
    }

    #[test]
    fn empty_when_start_exceeds_end() {
        assert_eq!(sample_positions(0.5, 0.4, 0.025, |x| x).count(), 0);
    }

    #[test]
    fn single_point_for_zero_length_interval() {
        let pts: Vec<_> = sample_positions(0.0, 0.0, 0.025, |_| 42.0).collect();
        assert_eq!(pts, vec![ChartPoint { x: 0.0, t: 42.0 }]);
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_position(0.0005), 0.001);
        assert_eq!(round_position(-0.0005), 0.0);
        assert_eq!(round_position(-0.0015), -0.001);
        assert_eq!(round_position(-0.0025), -0.002);
        assert_eq!(round_position(0.4), 0.4);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = sample_positions(0.0, 0.05, 0.025, |x| x);
        assert_eq!(it.by_ref().count(), 3);
        assert!(it.next().is_none());
    }
}
