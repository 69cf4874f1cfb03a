use crate::geometry::Point;

/// Hooks invoked while the finder scans sorted sensors. Every method has a
/// no-op default so observers only implement what they need.
pub trait ScanObserver {
    /// `point` passed the threshold test against every member of `current`
    /// (the set before `point` was appended).
    fn accepted(&mut self, _point: &Point, _current: &[Point]) {}

    /// `point` was farther than the threshold from `conflict`.
    fn rejected(&mut self, _point: &Point, _conflict: &Point) {}

    /// `current` just became the largest set seen so far.
    fn captured(&mut self, _current: &[Point]) {}
}

impl ScanObserver for () {}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Accepted { point: Point, set_len: usize },
    Rejected { point: Point, conflict: Point },
    Captured { snapshot: Vec<Point> },
}

/// Observer that keeps every event, including a copy of the set at each
/// capture.
#[derive(Debug, Default, Clone)]
pub struct ScanTrace {
    events: Vec<ScanEvent>,
}

impl ScanTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captures(&self) -> impl Iterator<Item = &[Point]> {
        self.events.iter().filter_map(|event| match event {
            ScanEvent::Captured { snapshot } => Some(snapshot.as_slice()),
            _ => None,
        })
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ScanEvent::Rejected { .. }))
            .count()
    }
}

impl ScanObserver for ScanTrace {
    fn accepted(&mut self, point: &Point, current: &[Point]) {
        self.events.push(ScanEvent::Accepted {
            point: *point,
            set_len: current.len(),
        });
    }

    fn rejected(&mut self, point: &Point, conflict: &Point) {
        self.events.push(ScanEvent::Rejected {
            point: *point,
            conflict: *conflict,
        });
    }

    fn captured(&mut self, current: &[Point]) {
        self.events.push(ScanEvent::Captured {
            snapshot: current.to_vec(),
        });
    }
}
