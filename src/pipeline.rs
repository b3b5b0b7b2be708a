use std::path::Path;

use anyhow::Result;

use crate::data::loader::{self, LoadError};
use crate::data::model::{Figure, Operation, Sweep};
use crate::export;

// ---------------------------------------------------------------------------
// Pipeline description
// ---------------------------------------------------------------------------

/// One benchmark rendering pipeline: which timing files to read, which
/// x coordinates they were sampled at, and where the figure goes.
///
/// Input and output locations are relative to a base directory supplied
/// at run time, so the same pipeline can point at a checkout, a build
/// tree, or a test fixture.
pub struct Pipeline {
    pub name: &'static str,
    pub x_label: &'static str,
    pub sweep: Sweep,
    /// Timing files in insert, search, delete order.
    pub inputs: [&'static str; 3],
    pub output: &'static str,
}

impl Pipeline {
    /// Single-threaded sweep over the tree degree: 3, 8, ..., 998.
    pub fn degree() -> Self {
        Pipeline {
            name: "degree",
            x_label: "degree",
            sweep: Sweep::new(3, 1001, 5),
            inputs: [
                "build/src/performance_insert",
                "build/src/performance_search",
                "build/src/performance_delete",
            ],
            output: "doc/res/performance.svg",
        }
    }

    /// Concurrent sweep over the worker count: 1 through 99.
    pub fn threads() -> Self {
        Pipeline {
            name: "thread",
            x_label: "number of threads",
            sweep: Sweep::new(1, 100, 1),
            inputs: [
                "build/src/performance_insert_concurrent",
                "build/src/performance_search_concurrent",
                "build/src/performance_delete_concurrent",
            ],
            output: "doc/res/performance_thread.svg",
        }
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Load the three timing series, assemble the figure, and export it.
///
/// Every failure is fatal: an unreadable or malformed input, a series whose
/// length does not match the sweep, or an unwritable destination. Nothing is
/// written unless the whole figure exports. Displaying the figure is left to
/// the caller.
pub fn run(pipeline: &Pipeline, base: &Path) -> Result<Figure> {
    let [insert_file, search_file, delete_file] = pipeline.inputs;
    let insert = load_input(base, insert_file, Operation::Insert)?;
    let search = load_input(base, search_file, Operation::Search)?;
    let delete = load_input(base, delete_file, Operation::Delete)?;

    let figure = Figure::new(pipeline.x_label, pipeline.sweep, insert, search, delete)?;

    let output = base.join(pipeline.output);
    export::save_figure(&figure, &output)?;
    log::info!("Wrote {}", output.display());

    Ok(figure)
}

fn load_input(base: &Path, file: &str, operation: Operation) -> Result<Vec<f64>, LoadError> {
    let series = loader::load_series(&base.join(file))?;
    log::info!("Loaded {} {operation} samples from {file}", series.len());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_pipeline_samples_200_points() {
        let pipeline = Pipeline::degree();
        assert_eq!(pipeline.sweep.len(), 200);
        assert_eq!(pipeline.sweep.first(), 3.0);
        assert_eq!(pipeline.sweep.last(), 998.0);
    }

    #[test]
    fn thread_pipeline_samples_99_points() {
        let pipeline = Pipeline::threads();
        assert_eq!(pipeline.sweep.len(), 99);
        assert_eq!(pipeline.sweep.first(), 1.0);
        assert_eq!(pipeline.sweep.last(), 99.0);
    }

    #[test]
    fn pipelines_read_insert_search_delete_in_order() {
        for pipeline in [Pipeline::degree(), Pipeline::threads()] {
            assert!(pipeline.inputs[0].contains("insert"));
            assert!(pipeline.inputs[1].contains("search"));
            assert!(pipeline.inputs[2].contains("delete"));
        }
    }
}
