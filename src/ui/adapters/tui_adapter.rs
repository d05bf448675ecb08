use color_eyre::eyre::Result;

use crate::app::ports::Renderer;
use crate::app::state::AppState;
use crate::components::layout::MainLayout;
use crate::tui::TuiRunner;

/// Draws the whole screen into the live terminal.
pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &mut AppState) -> Result<()> {
        self.tui
            .terminal()
            .draw(|frame| MainLayout::render(frame, state, None))?;
        Ok(())
    }
}
