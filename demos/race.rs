use std::sync::Arc;

use monkeyrace::{
    normalize, Alphabet, FormatOptions, LogWriter, RaceConfig, RaceCoordinator, Scoreboard,
    Subscribe,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let opts = FormatOptions::default();
    let target = normalize("It was the best of times", &opts);
    let alphabet = Alphabet::from_options(&opts);

    let cfg = RaceConfig {
        worker_count: 4,
        checkpoint_interval: 500_000,
        ..RaceConfig::default()
    };

    let board = Scoreboard::new();
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter), Arc::new(board.clone())];
    let coordinator = RaceCoordinator::new(cfg, subs);

    // The full quote would outlive the universe; race a short prefix.
    let report = coordinator.run(&target[..4], &alphabet).await?;
    println!(
        "worker {} reproduced {:?} after {} presses",
        report.winner,
        &target[..4],
        report.winning_worker().presses
    );

    for row in board.snapshot().await {
        println!(
            "  worker {}: presses={} best={} finished={:?}",
            row.worker, row.presses, row.best_len, row.finished
        );
    }
    Ok(())
}
