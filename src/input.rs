use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;

use crate::constants::{BUTTON_GAP, BUTTON_HEIGHT, BUTTON_WIDTH, BUTTON_Y, PANEL_X};
use crate::direction::Direction;
use crate::geometry::{Position, Rect};

/// Clickable buttons on the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Pause,
    ClearLog,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Start, Button::Pause, Button::ClearLog];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Pause => "Pause",
            Button::ClearLog => "Clear Log",
        }
    }

    /// Window-space rectangle of the button.
    pub fn rect(&self) -> Rect {
        let slot = match self {
            Button::Start => 0,
            Button::Pause => 1,
            Button::ClearLog => 2,
        };
        Rect::new(
            PANEL_X + slot * (BUTTON_WIDTH + BUTTON_GAP),
            BUTTON_Y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn at(point: Position) -> Option<Button> {
        Button::ALL.into_iter().find(|button| button.rect().contains(point))
    }

    fn action(&self) -> InputAction {
        match self {
            Button::Start => InputAction::Start,
            Button::Pause => InputAction::Pause,
            Button::ClearLog => InputAction::ClearLog,
        }
    }
}

// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    ToggleRun,
    Start,
    Pause,
    ClearLog,
    ToggleLayout,
    ToggleManual,
    CycleLight(Direction),
    Exit,
}

pub struct InputHandler {
    ctrl_held: [bool; 2], // left, right
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            ctrl_held: [false; 2],
        }
    }

    // Process an SDL event and return the action to take
    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::Quit { .. } => InputAction::Exit,
            Event::KeyDown {
                keycode: Some(keycode),
                keymod,
                repeat,
                ..
            } => {
                match keycode {
                    Keycode::LCtrl => self.ctrl_held[0] = true,
                    Keycode::RCtrl => self.ctrl_held[1] = true,
                    _ => {}
                }
                if *repeat {
                    return InputAction::None;
                }

                match keycode {
                    Keycode::C if is_ctrl(*keymod) => InputAction::ClearLog,
                    Keycode::Space => InputAction::ToggleRun,
                    Keycode::L => InputAction::ToggleLayout,
                    Keycode::M => InputAction::ToggleManual,
                    Keycode::Up => InputAction::CycleLight(Direction::North),
                    Keycode::Down => InputAction::CycleLight(Direction::South),
                    Keycode::Right => InputAction::CycleLight(Direction::East),
                    Keycode::Left => InputAction::CycleLight(Direction::West),
                    Keycode::Escape => InputAction::Exit,
                    _ => InputAction::None,
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                match keycode {
                    Keycode::LCtrl => self.ctrl_held[0] = false,
                    Keycode::RCtrl => self.ctrl_held[1] = false,
                    _ => {}
                }
                InputAction::None
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Button::at(Position::new(*x, *y))
                .map(|button| button.action())
                .unwrap_or(InputAction::None),
            _ => InputAction::None,
        }
    }

    /// Whether either Ctrl key is currently held down.
    pub fn is_debug_overlay(&self) -> bool {
        self.ctrl_held.iter().any(|&held| held)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ctrl(keymod: Mod) -> bool {
    keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD)
}
