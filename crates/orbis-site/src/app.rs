use orbis_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use orbis_engine::input::{InputEvent, KeyState, MouseButton, MouseButtonState};
use orbis_engine::paint::Color;
use orbis_engine::window::{CursorIcon, WindowEvent, WindowId};
use orbis_scene::SceneError;

use crate::site::Site;

/// Pixels per wheel line for high-precision scroll devices.
const WHEEL_PX_PER_LINE: f32 = 40.0;

/// Engine-facing host: forwards window and input events to the current view.
pub struct SiteApp {
    site: Site,
    clear: Color,
    titled: bool,
}

impl SiteApp {
    pub fn new(site: Site, clear: Color) -> Self {
        Self { site, clear, titled: false }
    }

    fn mount(&mut self, window: &WindowCtx<'_>) {
        match self.site.view_mut().mount(window) {
            Ok(()) => {}
            Err(err @ SceneError::DegenerateMount { .. }) => {
                log::debug!("mount deferred: {err}");
            }
            Err(err) => log::warn!("mount failed: {err}"),
        }
    }

    fn navigated(&mut self, window: &WindowCtx<'_>) {
        window.set_title(&self.site.view().title());
        self.titled = true;
        self.mount(window);
        window.request_redraw();
    }
}

impl App for SiteApp {
    fn on_window_event(&mut self, window: &WindowCtx<'_>, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.site.view_mut().resize(window);
            }
            WindowEvent::CloseRequested => {
                self.site.view_mut().unmount();
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::PointerMoved(ev) => self.site.view_mut().pointer_move(ev.x, ev.y),
            InputEvent::PointerButton(ev) if ev.button == MouseButton::Left => {
                let pressed = ev.state == MouseButtonState::Pressed;
                self.site.view_mut().pointer_button(pressed);
                window.set_cursor(if pressed { CursorIcon::Grabbing } else { CursorIcon::Default });
            }
            InputEvent::MouseWheel { delta, .. } => {
                self.site.view_mut().wheel(delta.lines_y(WHEEL_PX_PER_LINE));
            }
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false, .. } => {
                if self.site.handle_key(*key) {
                    self.navigated(window);
                }
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn wants_redraw(&self, _window_id: WindowId) -> bool {
        self.site.view().wants_frame()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.titled {
            ctx.window.set_title(&self.site.view().title());
            self.titled = true;
        }
        self.mount(&ctx.window);

        let clear = self.clear;
        let view = self.site.view_mut();
        view.advance(&ctx.time);
        ctx.render(clear, |rctx, target| view.render(rctx, target))
    }
}
