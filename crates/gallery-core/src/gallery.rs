//! The gallery: owns every cell, the shared pointer state and the run
//! lifecycle. Front-ends forward events here by cell index and call
//! [`Gallery::frame`] once per animation tick.

use crate::cell::{create_curve_cell, CellEvent, CellState};
use crate::clock::{FrameClock, FrameTime};
use crate::error::GalleryError;
use crate::interaction::{CellRect, PointerState};
use crate::render::{render_frame, Surface};
use fnv::FnvHashMap;
use instant::Instant;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Nominal cell edge in css pixels, used to size the grid.
    pub cell_css_size: f64,
    pub min_cells: usize,
    pub max_cells: usize,
    /// Fixed seed for reproducible galleries; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            cell_css_size: 150.0,
            min_cells: 100,
            max_cells: 500,
            seed: None,
        }
    }
}

impl GalleryConfig {
    /// Enough cells to tile a `width` x `height` viewport, within bounds.
    pub fn cell_count_for_viewport(&self, width: f64, height: f64) -> usize {
        let area = self.cell_css_size * self.cell_css_size;
        let fit = if area > 0.0 && width.is_finite() && height.is_finite() {
            ((width.max(0.0) * height.max(0.0)) / area).floor() as usize
        } else {
            0
        };
        fit.clamp(self.min_cells, self.max_cells.max(self.min_cells))
    }
}

pub struct Gallery {
    cells: Vec<CellState>,
    pointer: PointerState,
    clock: FrameClock,
    rng: StdRng,
    /// Active holds: pointer id -> cell index.
    holds: FnvHashMap<i32, usize>,
    running: bool,
}

impl Gallery {
    pub fn new(config: &GalleryConfig, cell_count: usize) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cells = (0..cell_count)
            .map(|_| create_curve_cell(&mut rng))
            .collect::<Vec<_>>();
        log::info!("[gallery] created {} cells", cells.len());
        Self {
            cells,
            pointer: PointerState::default(),
            clock: FrameClock::default(),
            rng,
            holds: FnvHashMap::default(),
            running: false,
        }
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<&CellState, GalleryError> {
        self.cells.get(index).ok_or(GalleryError::CellOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut CellState, GalleryError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(GalleryError::CellOutOfRange { index, len })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed animation time as of the latest frame; event timestamps use it.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Begin a run with fresh timing state. Per-cell state timestamped by an
    /// earlier run is cleared along with the clock.
    pub fn start(&mut self) {
        self.clock.reset();
        self.pointer = PointerState::default();
        self.holds.clear();
        for cell in &mut self.cells {
            cell.reset_run();
        }
        self.running = true;
        log::info!("[gallery] start");
    }

    /// End the run: frames become no-ops, pointer state and holds are dropped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pointer = PointerState::default();
        self.holds.clear();
        for cell in &mut self.cells {
            cell.cancel_hold();
        }
        log::info!("[gallery] stop after {:.2}s", self.clock.elapsed());
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Render every cell for the tick at `now`, one surface per cell in order.
    /// Returns `None` while stopped.
    pub fn frame<S: Surface>(
        &mut self,
        now: Instant,
        surfaces: &mut [S],
    ) -> Result<Option<FrameTime>, GalleryError> {
        if !self.running {
            return Ok(None);
        }
        if surfaces.len() != self.cells.len() {
            return Err(GalleryError::SurfaceMismatch {
                cells: self.cells.len(),
                surfaces: surfaces.len(),
            });
        }
        let time = self.clock.tick(now);
        for (cell, surface) in self.cells.iter_mut().zip(surfaces.iter_mut()) {
            render_frame(cell, &self.pointer, surface, time.dt, time.elapsed);
        }
        Ok(Some(time))
    }

    pub fn update_pointer_state(&mut self, x: f64, y: f64, active: bool) {
        self.pointer.update(x, y, active);
    }

    pub fn set_cell_bounds(&mut self, index: usize, rect: CellRect) -> Result<(), GalleryError> {
        self.cell_mut(index)?.bounds = rect;
        Ok(())
    }

    /// Single click at normalized `(x, y)`. Returns whether a ripple spawned.
    pub fn click(&mut self, index: usize, x: f64, y: f64) -> Result<bool, GalleryError> {
        let ev = CellEvent::new(x, y, self.clock.elapsed());
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GalleryError::CellOutOfRange { index, len })?;
        Ok(cell.handle_click(ev, &mut self.rng))
    }

    /// Re-roll the cell's curve and burst at the click point.
    pub fn double_click(&mut self, index: usize, x: f64, y: f64) -> Result<(), GalleryError> {
        let ev = CellEvent::new(x, y, self.clock.elapsed());
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GalleryError::CellOutOfRange { index, len })?;
        cell.handle_double_click(ev, &mut self.rng);
        Ok(())
    }

    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        index: usize,
        x: f64,
        y: f64,
    ) -> Result<(), GalleryError> {
        let ev = CellEvent::new(x, y, self.clock.elapsed());
        if let Some(prev) = self.holds.insert(pointer_id, index) {
            if let Some(cell) = self.cells.get_mut(prev) {
                cell.cancel_hold();
            }
        }
        match self.cell_mut(index) {
            Ok(cell) => {
                cell.handle_pointer_down(ev);
                Ok(())
            }
            Err(e) => {
                self.holds.remove(&pointer_id);
                Err(e)
            }
        }
    }

    /// Track a held pointer moving over its cell (normalized coordinates).
    pub fn pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) {
        if let Some(&index) = self.holds.get(&pointer_id) {
            if let Some(cell) = self.cells.get_mut(index) {
                cell.handle_pointer_move(x, y);
            }
        }
    }

    /// Release `pointer_id`'s hold, if any. Returns the burst magnitude when
    /// the hold was long enough to burst.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Option<f64> {
        let index = self.holds.remove(&pointer_id)?;
        let time = self.clock.elapsed();
        let cell = self.cells.get_mut(index)?;
        cell.handle_pointer_up(time, &mut self.rng)
    }

    /// Drop `pointer_id`'s hold without a burst.
    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        if let Some(index) = self.holds.remove(&pointer_id) {
            if let Some(cell) = self.cells.get_mut(index) {
                cell.cancel_hold();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> Gallery {
        let config = GalleryConfig {
            seed: Some(1234),
            ..GalleryConfig::default()
        };
        Gallery::new(&config, count)
    }

    #[test]
    fn viewport_cell_count_is_clamped() {
        let config = GalleryConfig::default();
        assert_eq!(config.cell_count_for_viewport(800.0, 600.0), 100);
        assert_eq!(config.cell_count_for_viewport(3000.0, 2000.0), 266);
        assert_eq!(config.cell_count_for_viewport(10_000.0, 10_000.0), 500);
        assert_eq!(config.cell_count_for_viewport(f64::NAN, 10.0), 100);
    }

    #[test]
    fn same_seed_builds_same_curves() {
        let a = seeded(8);
        let b = seeded(8);
        for (x, y) in a.cells().iter().zip(b.cells()) {
            assert_eq!(x.spec, y.spec);
            assert_eq!(x.modulators, y.modulators);
        }
    }

    #[test]
    fn handlers_reject_unknown_cells() {
        let mut g = seeded(2);
        assert_eq!(
            g.click(5, 0.5, 0.5),
            Err(GalleryError::CellOutOfRange { index: 5, len: 2 })
        );
        assert!(g.double_click(2, 0.5, 0.5).is_err());
        assert!(g.pointer_down(1, 9, 0.5, 0.5).is_err());
        assert_eq!(g.pointer_up(1), None);
        assert!(g.set_cell_bounds(3, CellRect::default()).is_err());
    }

    #[test]
    fn stop_clears_pointer_and_holds() {
        let mut g = seeded(2);
        g.start();
        g.update_pointer_state(10.0, 20.0, true);
        g.pointer_down(7, 1, 0.5, 0.5).unwrap();
        assert!(g.cell(1).unwrap().hold.active);
        g.stop();
        assert!(!g.is_running());
        assert_eq!(*g.pointer(), PointerState::default());
        assert!(!g.cell(1).unwrap().hold.active);
        assert_eq!(g.pointer_up(7), None);
    }

    #[test]
    fn second_press_with_same_pointer_moves_the_hold() {
        let mut g = seeded(3);
        g.pointer_down(1, 0, 0.5, 0.5).unwrap();
        g.pointer_down(1, 2, 0.5, 0.5).unwrap();
        assert!(!g.cell(0).unwrap().hold.active);
        assert!(g.cell(2).unwrap().hold.active);
        g.pointer_cancel(1);
        assert!(!g.cell(2).unwrap().hold.active);
    }
}
