use num::ToPrimitive;

pub trait Extrema<T> {
    fn extrema(&self) -> Option<(T, T)>;
}

impl<T> Extrema<T> for [T]
where
    T: PartialOrd + Copy,
{
    fn extrema(&self) -> Option<(T, T)> {
        let mut iter = self.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), &x| {
            (
                if x < min { x } else { min },
                if x > max { x } else { max },
            )
        }))
    }
}

pub trait Mean {
    fn mean(&self) -> Option<f64>;
}

impl<N> Mean for [N]
where
    N: ToPrimitive,
{
    fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self.iter().filter_map(|x| x.to_f64()).sum();
        Some(sum / self.len() as f64)
    }
}
