//! Writes run output as ESRI ASCII layers, one file per layer per tick.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use sprawl_core::{CategoryGrid, Grid, TickId};
use sprawl_engine::{DiagnosticSink, SinkError};
use sprawl_raster::{write_ascii_grid, RasterError, RasterHeader, RasterValue};
use sprawl_rule::StepDiagnostics;
use tracing::debug;

/// Persists grids and diagnostic layers under one directory.
///
/// File names are `<layer>_<tick:04>.asc`.
pub struct LayerWriter {
    dir: PathBuf,
    header: RasterHeader,
    files_written: usize,
}

impl LayerWriter {
    /// Create `dir` if needed. `header` supplies the georeferencing of
    /// every layer.
    pub fn create(dir: &Path, header: RasterHeader) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            header: header.with_nodata(None),
            files_written: 0,
        })
    }

    /// Number of files written so far.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Path of `layer` at `tick`.
    pub fn path_of(&self, layer: &str, tick: TickId) -> PathBuf {
        self.dir.join(format!("{layer}_{:04}.asc", tick.0))
    }

    fn write<T: RasterValue>(
        &mut self,
        layer: &str,
        tick: TickId,
        grid: &Grid<T>,
    ) -> Result<(), SinkError> {
        let path = self.path_of(layer, tick);
        let result = File::create(&path)
            .map_err(RasterError::from)
            .and_then(|file| write_ascii_grid(BufWriter::new(file), &self.header, grid));
        match result {
            Ok(()) => {
                debug!(path = %path.display(), "layer written");
                self.files_written += 1;
                Ok(())
            }
            Err(e) => Err(SinkError::Backend {
                tick,
                source: Box::new(e),
            }),
        }
    }
}

impl DiagnosticSink for LayerWriter {
    fn record_grid(&mut self, tick: TickId, grid: &CategoryGrid) -> Result<(), SinkError> {
        self.write("category", tick, grid)
    }

    fn record(&mut self, diagnostics: &StepDiagnostics) -> Result<(), SinkError> {
        let tick = diagnostics.tick;
        self.write("before", tick, &diagnostics.before)?;
        self.write("urban_probability", tick, &diagnostics.urban_probability)?;
        self.write("semi_urban_probability", tick, &diagnostics.semi_urban_probability)?;
        self.write("contest", tick, &diagnostics.contest)?;
        self.write("converted", tick, &diagnostics.converted)
    }
}
