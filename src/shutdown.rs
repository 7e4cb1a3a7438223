use tokio::signal::{
    self,
    unix::{signal, SignalKind},
};

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install ctrl+c handler");
    };
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to create sigterm handler");

    tokio::select! {
        _ = ctrl_c => {
            println!("\nServer closing...");
        },
        _ = sigterm.recv() => {
            println!("server shutdown");
        }
    }
}
