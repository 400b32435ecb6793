use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use zcanvas::app::Canvas;
use zcanvas::kernel::services::adapters::settings::{
    ensure_settings_file, get_settings_path, load_settings,
};
use zcanvas::kernel::services::adapters::{
    spawn_stdio_host, RopeWidgetFactory, SettingsThemeSource, TokioExecutor,
};
use zcanvas::kernel::services::canvas_bus;

fn main() -> io::Result<()> {
    let _logging = zcanvas::logging::init();

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(%err, "cannot ensure settings file");
    }
    let settings = load_settings();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_io()
        .enable_time()
        .build()?;
    let executor = TokioExecutor::new(runtime.handle().clone());

    let (bus_tx, mut bus_rx) = canvas_bus();
    let command_tx = spawn_stdio_host(&executor, bus_tx);

    let theme = SettingsThemeSource::new(get_settings_path(), settings.theme.clone());
    let mut canvas = Canvas::new(
        settings.clone(),
        Box::new(RopeWidgetFactory),
        Box::new(theme),
        Box::new(command_tx),
    );

    let tick = Duration::from_millis(settings.tick_ms.max(1));
    loop {
        match bus_rx.recv_timeout(tick) {
            Ok(msg) => {
                canvas.handle_message(msg);
                while let Ok(msg) = bus_rx.try_recv() {
                    canvas.handle_message(msg);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        canvas.tick(Instant::now());
    }

    tracing::info!("host closed, shutting down");
    Ok(())
}
