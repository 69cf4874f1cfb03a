use crate::geometry::Point;
use crate::selection::sort::sort_by_x;
use crate::selection::trace::ScanObserver;
use crate::telemetry::log::LogManager;

/// Result of one greedy scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Chosen sensors in ascending x order.
    pub points: Vec<Point>,
    /// Sensors examined after the seed sensor.
    pub scanned: usize,
    pub rejected: usize,
    /// Times the candidate set became the new largest set.
    pub captures: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Greedy single-pass finder.
///
/// The first sorted sensor seeds the candidate set. Each following sensor is
/// appended only if it lies within `threshold` of every sensor already in the
/// set; a sensor that fails is skipped for good and the set is never reset.
/// The largest set is tracked as a length into the growing candidate, so the
/// reported subset is always a prefix of the final candidate set.
#[derive(Debug, Clone)]
pub struct SubsetFinder {
    threshold: f64,
    logger: LogManager,
}

impl SubsetFinder {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            logger: LogManager::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Sorts a copy of `points` by x and scans it.
    pub fn find(&self, points: &[Point]) -> Selection {
        let mut sorted = points.to_vec();
        sort_by_x(&mut sorted);
        self.select(&sorted)
    }

    /// Scans sensors that are already sorted by x.
    pub fn select(&self, sorted: &[Point]) -> Selection {
        self.select_traced(sorted, &mut ())
    }

    /// Scans sorted sensors, reporting every decision to `observer`.
    pub fn select_traced<O: ScanObserver>(
        &self,
        sorted: &[Point],
        observer: &mut O,
    ) -> Selection {
        let Some((seed, rest)) = sorted.split_first() else {
            return Selection::default();
        };

        let mut current = Vec::with_capacity(sorted.len());
        current.push(*seed);
        let mut best_len = 0;
        let mut rejected = 0;
        let mut captures = 0;

        for p in rest {
            let conflict = current
                .iter()
                .find(|q| p.distance(q) > self.threshold)
                .copied();

            match conflict {
                None => {
                    observer.accepted(p, &current);
                    current.push(*p);
                }
                Some(q) => {
                    observer.rejected(p, &q);
                    rejected += 1;
                }
            }

            if current.len() > best_len {
                best_len = current.len();
                captures += 1;
                self.logger
                    .trace(|| format!("new largest set of {} sensors", best_len));
                observer.captured(&current);
            }
        }

        current.truncate(best_len);
        self.logger.record(&format!(
            "SubsetFinder kept {} of {} sensors (threshold {}, rejected {})",
            current.len(),
            sorted.len(),
            self.threshold,
            rejected
        ));

        Selection {
            points: current,
            scanned: rest.len(),
            rejected,
            captures,
        }
    }
}

/// Sorts `points` by x and returns the largest subset the greedy scan finds.
pub fn find_largest_subset(threshold: f64, points: &[Point]) -> Vec<Point> {
    SubsetFinder::new(threshold).find(points).points
}
