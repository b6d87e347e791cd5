/// Screens the host can show. Only `InGame` advances the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    InGame,
    PauseMenu,
}

/// Stack of screens; the top one is active.
#[derive(Debug)]
pub struct UiState {
    stack: Vec<Screen>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        UiState {
            stack: vec![Screen::MainMenu],
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::MainMenu)
    }

    pub fn push(&mut self, screen: Screen) {
        tracing::debug!(?screen, "push screen");
        self.stack.push(screen);
    }

    /// Never pops the bottom screen.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn reset(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Escape pauses a running match and backs out of anything else.
    pub fn handle_escape(&mut self) {
        match self.current_screen() {
            Screen::InGame => self.push(Screen::PauseMenu),
            Screen::MainMenu => {}
            _ => self.pop(),
        }
    }
}
