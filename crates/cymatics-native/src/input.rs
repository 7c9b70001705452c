use cymatics_core::InputEvent;
use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Turns winit window events into viewer input.
///
/// winit reports button presses without a position, so the last cursor
/// location is kept here and attached to each press.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMoved(self.position))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerPressed(self.position),
                ElementState::Released => InputEvent::PointerReleased,
            }),
            WindowEvent::KeyboardInput { event, .. }
                if event.physical_key == PhysicalKey::Code(KeyCode::KeyS) =>
            {
                Some(InputEvent::SaveKey {
                    held: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            // Key and button releases are not delivered once focus is gone.
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerReleased),
            _ => None,
        }
    }
}
