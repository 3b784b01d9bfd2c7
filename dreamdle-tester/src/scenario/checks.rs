use super::fixture::{Controller, Fixture};
use anyhow::{Context, Result, bail, ensure};
use dreamdle_game::{GameMode, IgnoreReason, SessionError, SubmitOutcome};

async fn start(controller: &Controller) -> Result<()> {
    controller
        .initialize()
        .await
        .with_context(|| format!("initializing {}", controller.mode()))?;
    Ok(())
}

async fn guess(controller: &Controller, name: &str) -> Result<SubmitOutcome> {
    controller
        .submit_guess(name)
        .await
        .with_context(|| format!("guessing {name:?} in {}", controller.mode()))
}

fn attempts(controller: &Controller) -> usize {
    controller.with_session(|s| s.map_or(0, |s| s.attempts().len()))
}

pub async fn smoke(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    for mode in GameMode::ALL {
        let game = fx.controller(&judge, mode);
        start(&game).await?;
        for decoy in fx.decoys(mode, 1) {
            let outcome = guess(&game, &decoy).await?;
            ensure!(
                outcome.is_recorded() && !outcome.is_victory(),
                "{mode}: wrong guess {decoy:?} gave {outcome:?}"
            );
        }
        let target = fx.target_name(mode)?;
        ensure!(guess(&game, &target).await?.is_victory(), "{mode}: target {target:?} did not win");
        ensure!(game.phase().is_won(), "{mode}: phase {:?} after win", game.phase());
        let summary = game.with_session(|s| s.and_then(|s| s.victory()));
        ensure!(
            summary.is_some_and(|v| v.target_name == target),
            "{mode}: victory summary does not name {target:?}"
        );
    }
    Ok(())
}

pub async fn rehydration_idempotent(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    for mode in GameMode::ALL {
        let first = fx.controller(&judge, mode);
        start(&first).await?;
        for decoy in fx.decoys(mode, 2) {
            guess(&first, &decoy).await?;
        }

        let reloaded = fx.controller(&judge, mode);
        let a = reloaded.initialize().await?;
        let snapshot_a = reloaded.snapshot();
        let b = reloaded.initialize().await?;
        ensure!(a == b, "{mode}: phase changed on reload ({a:?} vs {b:?})");
        ensure!(snapshot_a == reloaded.snapshot(), "{mode}: second reload differs");
        ensure!(
            snapshot_a == first.snapshot(),
            "{mode}: reloaded session differs from the live one"
        );
    }
    Ok(())
}

pub async fn reveal_monotonic(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    for mode in [GameMode::Emoji, GameMode::Description] {
        let game = fx.controller(&judge, mode);
        start(&game).await?;
        let total = game.reveal().total;
        ensure!(game.reveal().revealed == 1, "{mode}: expected one clue up front");

        for (i, decoy) in fx.decoys(mode, total + 1).iter().enumerate() {
            let before = game.reveal().revealed;
            guess(&game, decoy).await?;
            let after = game.reveal().revealed;
            let expected = (i + 2).min(total);
            ensure!(
                after >= before && after == expected,
                "{mode}: miss {} revealed {after}, expected {expected}",
                i + 1
            );
        }
        guess(&game, &fx.target_name(mode)?).await?;
        ensure!(
            game.reveal().is_complete(),
            "{mode}: win left {} clues hidden",
            game.reveal().hidden()
        );
    }
    Ok(())
}

pub async fn double_submit(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    judge.set_latency(3);
    let game = fx.controller(&judge, GameMode::Classic);
    start(&game).await?;
    let decoys = fx.decoys(GameMode::Classic, 2);
    let [first, second] = decoys.as_slice() else {
        bail!("roster too small for two decoys");
    };

    let (a, b) = tokio::join!(game.submit_guess(first), game.submit_guess(second));
    ensure!(a?.is_recorded(), "first submission was not recorded");
    ensure!(
        b? == SubmitOutcome::Ignored(IgnoreReason::InFlight),
        "second submission was not rejected as in flight"
    );
    ensure!(judge.guess_calls() == 1, "judge saw {} guesses", judge.guess_calls());
    ensure!(attempts(&game) == 1, "expected exactly one attempt");
    ensure!(!game.is_submitting(), "in-flight guard still held");
    Ok(())
}

pub async fn win_freezes(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    let game = fx.controller(&judge, GameMode::Classic);
    start(&game).await?;
    guess(&game, &fx.target_name(GameMode::Classic)?).await?;

    let before = game.snapshot();
    let calls = judge.guess_calls();
    for decoy in fx.decoys(GameMode::Classic, 2) {
        let outcome = guess(&game, &decoy).await?;
        ensure!(
            outcome == SubmitOutcome::Ignored(IgnoreReason::Completed),
            "guess after win gave {outcome:?}"
        );
    }
    ensure!(game.snapshot() == before, "session changed after win");
    ensure!(judge.guess_calls() == calls, "judge contacted after win");
    Ok(())
}

pub async fn repeat_guess(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    let game = fx.controller(&judge, GameMode::Classic);
    start(&game).await?;
    let Some(decoy) = fx.decoys(GameMode::Classic, 1).pop() else {
        bail!("roster has no decoys");
    };
    guess(&game, &decoy).await?;

    let shouted = format!("  {}  ", decoy.to_uppercase());
    let outcome = guess(&game, &shouted).await?;
    ensure!(
        outcome == SubmitOutcome::Ignored(IgnoreReason::AlreadyGuessed),
        "repeat {shouted:?} gave {outcome:?}"
    );
    ensure!(judge.guess_calls() == 1, "repeat reached the judge");
    ensure!(attempts(&game) == 1, "repeat was appended");
    Ok(())
}

pub async fn degraded_clues(fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    for mode in [GameMode::Emoji, GameMode::Description] {
        let game = fx.controller(&judge, mode);
        match game.initialize().await {
            Err(SessionError::DegradedClueSet { mode: reported }) if reported == mode => {}
            other => bail!("{mode}: expected a degraded clue set, got {other:?}"),
        }
        ensure!(!game.is_initialized(), "{mode}: degraded session was loaded");
    }
    let classic = fx.controller(&judge, GameMode::Classic);
    start(&classic).await?;
    Ok(())
}

pub async fn submission_failure(mut fx: Fixture) -> Result<()> {
    let judge = fx.judge();
    let game = fx.controller(&judge, GameMode::Classic);
    start(&game).await?;
    let Some(decoy) = fx.decoys(GameMode::Classic, 1).pop() else {
        bail!("roster has no decoys");
    };

    judge.fail_next_guesses(1);
    match game.submit_guess(&decoy).await {
        Err(SessionError::Submission(_)) => {}
        other => bail!("expected a submission error, got {other:?}"),
    }
    ensure!(attempts(&game) == 0, "failed guess was appended");
    ensure!(!game.is_submitting(), "in-flight guard leaked");

    ensure!(guess(&game, &decoy).await?.is_recorded(), "retry was not recorded");
    ensure!(attempts(&game) == 1, "retry did not append");
    Ok(())
}
