use std::fmt;

use thiserror::Error;

/// Y-axis description shared by every panel.
pub const Y_LABEL: &str = "time";

// ---------------------------------------------------------------------------
// Operation – which benchmark produced a series
// ---------------------------------------------------------------------------

/// One benchmarked operation. Panels always appear in [`Operation::ALL`]
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Search,
    Delete,
}

impl Operation {
    /// Fixed panel order: insert, search, delete.
    pub const ALL: [Operation; 3] = [Operation::Insert, Operation::Search, Operation::Delete];

    /// Lower-case name used for panel titles and log lines.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Search => "search",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Sweep – the x-axis of one benchmark regime
// ---------------------------------------------------------------------------

/// The ordered x-axis coordinates a benchmark was run against, written as
/// (start, stop-exclusive, step) to mirror the loop the harness iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    start: u32,
    stop: u32,
    step: u32,
}

impl Sweep {
    /// `step` must be non-zero.
    pub fn new(start: u32, stop: u32, step: u32) -> Self {
        debug_assert!(step > 0);
        Sweep { start, stop, step }
    }

    /// Number of coordinates in the sweep.
    pub fn len(&self) -> usize {
        (self.stop.saturating_sub(self.start)).div_ceil(self.step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First coordinate.
    pub fn first(&self) -> f64 {
        f64::from(self.start)
    }

    /// Last coordinate actually reached by the stepping.
    pub fn last(&self) -> f64 {
        let steps = self.len().saturating_sub(1) as u32;
        f64::from(self.start + steps * self.step)
    }

    /// Iterate the coordinates in order.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        let Sweep { start, step, .. } = *self;
        (0..self.len() as u32).map(move |i| f64::from(start + i * step))
    }
}

// ---------------------------------------------------------------------------
// Figure – three stacked panels over one sweep
// ---------------------------------------------------------------------------

/// One labeled chart within the figure: an operation and its measured
/// timings, one value per sweep coordinate.
#[derive(Debug, Clone)]
pub struct Panel {
    pub operation: Operation,
    pub values: Vec<f64>,
}

/// A series whose length disagrees with the sweep it is plotted against.
#[derive(Debug, Error)]
#[error("{operation} series has {actual} values but the sweep has {expected} points")]
pub struct ShapeError {
    pub operation: Operation,
    pub expected: usize,
    pub actual: usize,
}

/// The complete figure of one pipeline run: insert, search and delete
/// timings stacked over a shared sweep. Built once, then handed read-only
/// to the export and display layers.
#[derive(Debug, Clone)]
pub struct Figure {
    pub x_label: &'static str,
    pub sweep: Sweep,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Assemble the figure, validating every series against the sweep.
    pub fn new(
        x_label: &'static str,
        sweep: Sweep,
        insert: Vec<f64>,
        search: Vec<f64>,
        delete: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        let panels = Operation::ALL
            .into_iter()
            .zip([insert, search, delete])
            .map(|(operation, values)| {
                if values.len() != sweep.len() {
                    return Err(ShapeError {
                        operation,
                        expected: sweep.len(),
                        actual: values.len(),
                    });
                }
                Ok(Panel { operation, values })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Figure {
            x_label,
            sweep,
            panels,
        })
    }

    /// Pair panel `index`'s values element-wise with the sweep coordinates.
    pub fn points(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sweep
            .values()
            .zip(self.panels[index].values.iter().copied())
    }
}
