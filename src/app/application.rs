//! Application - Process Setup and the Main Window
//!
//! Builds the GPUI application, registers global state, and opens the
//! catalog window.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

actions!(beacon, [Quit]);

/// Centered window sized for the catalog, with a transparent titlebar so
/// the header bar draws its own chrome
fn main_window_options(cx: &mut App) -> WindowOptions {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );

    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Beacon UI")),
            appears_transparent: true,
            traffic_light_position: Some(gpui::point(px(10.0), px(10.0))),
        }),
        ..Default::default()
    }
}

/// Run the Beacon UI catalog application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit once the last window closes
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        let options = main_window_options(cx);
        let opened = cx.open_window(options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
