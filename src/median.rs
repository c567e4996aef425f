use log::debug;

use crate::node::HeapKind;
use crate::queue::PriorityQueue;

/// Computes the running median of an integer stream: one output per input
/// element, each the median of the prefix ending there.
///
/// Two queues split the stream around the current median: `low` is a
/// max-queue holding the smaller half, `high` a min-queue holding the larger
/// half, every element serving as its own priority. The first element seeds
/// `low` and is its own median. Each later element lands on one side (the
/// heavier queue sheds its root to the other side first when the newcomer
/// belongs to it), then the median is read from the roots: the root of the
/// heavier queue when sizes differ, the mean of both roots when they match.
///
/// The queues never differ in size by more than one. When sizes match and the
/// incoming element equals the current median, it lands in `high`.
pub fn running_median(values: &[i64]) -> Vec<f64> {
    let mut low: PriorityQueue<i64, i64> = PriorityQueue::new(HeapKind::Max);
    let mut high: PriorityQueue<i64, i64> = PriorityQueue::new(HeapKind::Min);

    let mut medians = Vec::with_capacity(values.len());
    let first = match values.first() {
        Some(&first) => first,
        None => return medians,
    };
    let mut mid = first as f64;
    low.push(first, first);
    medians.push(mid);

    for &x in values[1..].iter() {
        if low.len() > high.len() {
            if (x as f64) < mid {
                if let Some(root) = low.pop() {
                    let shed = *root.priority();
                    high.push(shed, shed);
                }
                low.push(x, x);
            } else {
                high.push(x, x);
            }
            mid = roots_mean(&low, &high).unwrap_or(mid);
        } else if high.len() > low.len() {
            if (x as f64) > mid {
                if let Some(root) = high.pop() {
                    let shed = *root.priority();
                    low.push(shed, shed);
                }
                high.push(x, x);
            } else {
                low.push(x, x);
            }
            mid = roots_mean(&low, &high).unwrap_or(mid);
        } else if (x as f64) < mid {
            low.push(x, x);
            if let Some(root) = low.peek() {
                mid = *root.priority() as f64;
            }
        } else {
            // x == mid lands in the high half
            high.push(x, x);
            if let Some(root) = high.peek() {
                mid = *root.priority() as f64;
            }
        }

        debug_assert!((low.len() as i64 - high.len() as i64).abs() <= 1);
        debug!(
            "x = {}: median {} (low {}, high {})",
            x,
            mid,
            low.len(),
            high.len()
        );
        medians.push(mid);
    }

    medians
}

// Mean of the two roots; `None` only if either side is empty, which the
// balance invariant rules out on the paths that call this.
fn roots_mean(low: &PriorityQueue<i64, i64>, high: &PriorityQueue<i64, i64>) -> Option<f64> {
    let l = *low.peek()?.priority() as f64;
    let h = *high.peek()?.priority() as f64;
    Some((l + h) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn empty_input() {
        init_test();
        assert_eq!(running_median(&[]), Vec::<f64>::new());
    }

    #[test]
    fn single_element() {
        init_test();
        assert_eq!(running_median(&[5]), vec![5.0]);
    }

    #[test]
    fn small_streams() {
        init_test();
        assert_eq!(running_median(&[5, 3]), vec![5.0, 4.0]);
        assert_eq!(running_median(&[5, 3, 8]), vec![5.0, 4.0, 5.0]);
        assert_eq!(running_median(&[2, 4, 1, 3]), vec![2.0, 3.0, 2.0, 2.5]);
    }

    #[test]
    fn output_length_matches_input() {
        init_test();
        let values: Vec<i64> = (0..37).map(|i| (i * 31) % 17 - 8).collect();
        assert_eq!(running_median(&values).len(), values.len());
    }

    #[test]
    fn ascending_and_descending() {
        init_test();
        assert_eq!(
            running_median(&[1, 2, 3, 4, 5]),
            vec![1.0, 1.5, 2.0, 2.5, 3.0]
        );
        assert_eq!(
            running_median(&[5, 4, 3, 2, 1]),
            vec![5.0, 4.5, 4.0, 3.5, 3.0]
        );
    }

    #[test]
    fn repeated_values() {
        init_test();
        // elements equal to the running median route to the high half
        assert_eq!(running_median(&[7, 7, 7, 7]), vec![7.0, 7.0, 7.0, 7.0]);
    }
}
