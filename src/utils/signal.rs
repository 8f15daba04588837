use futures::future;
use tokio::signal;

/// Resolves on the first shutdown signal (SIGINT, SIGTERM or SIGQUIT on unix,
/// ctrl-c elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{self, SignalKind};

        let mut signals = Vec::with_capacity(3);

        for kind in [
            SignalKind::interrupt(),
            SignalKind::terminate(),
            SignalKind::quit(),
        ] {
            match unix::signal(kind) {
                Ok(listener) => signals.push(listener),
                Err(err) => error!("failed to initialize signal listener: {kind:?}. error: {err}"),
            }
        }

        if signals.is_empty() {
            return future::pending::<()>().await;
        }

        let waiting = signals.iter_mut().map(|signal| Box::pin(signal.recv()));
        future::select_all(waiting).await;
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {err}");
            future::pending::<()>().await;
        }
    }

    info!("shutdown signal received");
}
