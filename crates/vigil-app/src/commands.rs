//! Subcommand runners.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};
use vigil_assistant::{AssistantEvent, AssistantStatus, Role};
use vigil_common::{
    CaptureId, CardAction, CardRef, InvestigationId, InvestigationStatus, PanelKey, UiAction,
    VigilError,
};
use vigil_config::VigilConfig;
use vigil_investigation::{status_text, SpeakerClient};

use crate::app_state::{build_voice_loop, VigilApp};
use crate::cli::{Command, SpeakerCommand};
use crate::console;
use crate::media::{DirectoryCapture, FileReplyPlayer};

pub async fn run(command: Command, config: VigilConfig) -> Result<(), VigilError> {
    match command {
        Command::Assistant {
            clips,
            replies,
            turns,
        } => run_assistant(config, &clips, replies, turns).await,
        Command::Captures {
            investigation,
            title,
        } => run_captures(config, InvestigationId(investigation), title).await,
        Command::Analyze { capture, face } => run_analyze(config, CaptureId(capture), face).await,
        Command::Card {
            investigation,
            title,
            status,
            action,
            timestamp,
        } => {
            let status = status.parse::<InvestigationStatus>().map_err(VigilError::Other)?;
            let action = parse_card_action(&action)?;
            let card = CardRef {
                id: InvestigationId(investigation),
                title,
                status,
                timestamp,
            };
            run_card(config, card, action).await
        }
        Command::Snapshot {
            investigation,
            image,
        } => run_snapshot(config, InvestigationId(investigation), &image).await,
        Command::Speaker { action } => run_speaker(config, action).await,
        Command::Config => {
            println!("{}", vigil_config::config_to_json(&config));
            Ok(())
        }
    }
}

async fn run_assistant(
    config: VigilConfig,
    clips: &Path,
    replies: Option<PathBuf>,
    turns: Option<usize>,
) -> Result<(), VigilError> {
    if !config.assistant.enabled {
        return Err(VigilError::Other("assistant is disabled in config".into()));
    }
    let device = DirectoryCapture::open(clips).await?;
    if let Some(dir) = &replies {
        tokio::fs::create_dir_all(dir).await?;
    }

    let (voice, mut events) = build_voice_loop(
        &config,
        Arc::new(device),
        Arc::new(FileReplyPlayer::new(replies)),
    )?;
    let mut app = VigilApp::connect(config)?;
    app.attach_assistant(voice);

    app.dispatch(UiAction::OpenPanel(PanelKey::Assistant)).await;
    app.dispatch(UiAction::ToggleAssistant).await;
    if !app.is_assistant_listening() {
        return Err(VigilError::Assistant("assistant did not start".into()));
    }

    let mut completed = 0usize;
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                console::print_event(&event);
                match &event {
                    AssistantEvent::Turn(message) if message.role == Role::Assistant => {
                        completed += 1;
                        if turns.is_some_and(|limit| completed >= limit) {
                            info!(completed, "turn limit reached");
                            break;
                        }
                    }
                    AssistantEvent::Status(AssistantStatus::MicError) => break,
                    _ => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    app.shutdown().await;
    while let Ok(event) = events.try_recv() {
        console::print_event(&event);
    }
    info!(completed, "assistant stopped");
    Ok(())
}

async fn run_captures(
    config: VigilConfig,
    investigation: InvestigationId,
    title: Option<String>,
) -> Result<(), VigilError> {
    let mut app = VigilApp::connect(config)?;
    if let Some(title) = title {
        app.remember_title(investigation, title);
    }
    app.dispatch(UiAction::OpenCaptures(investigation)).await;
    if let Some(view) = app.captures_view() {
        print!("{view}");
    }
    Ok(())
}

async fn run_analyze(
    config: VigilConfig,
    capture: CaptureId,
    face: Option<usize>,
) -> Result<(), VigilError> {
    let mut app = VigilApp::connect(config)?;
    app.dispatch(UiAction::AnalyzeCapture(capture)).await;
    if let Some(view) = app.group_view() {
        print!("{view}");
    }
    if let Some(index) = face {
        app.dispatch(UiAction::InspectFace(index)).await;
        match app.person_view() {
            Some(view) => print!("{view}"),
            None => warn!(index, "no face details to show"),
        }
    }
    let trail: Vec<String> = app.panels().panels().iter().map(|p| p.to_string()).collect();
    info!(panels = %trail.join(" > "), "drill-down");
    Ok(())
}

fn parse_card_action(value: &str) -> Result<CardAction, VigilError> {
    match value {
        "open" => Ok(CardAction::Open),
        "close" => Ok(CardAction::CloseLiveScreen),
        other => CardAction::from_data_action(other)
            .ok_or_else(|| VigilError::Other(format!("unknown card action: {other}"))),
    }
}

async fn run_card(config: VigilConfig, card: CardRef, action: CardAction) -> Result<(), VigilError> {
    let mut app = VigilApp::connect(config)?;
    app.dispatch(UiAction::Card { card, action }).await;

    if let Some(notice) = app.notices().last() {
        println!("{notice}");
        return Ok(());
    }
    match app.visible_panel() {
        Some(PanelKey::Confirmation) => {
            if let Some(request) = app.confirmation() {
                println!("{}", request.title);
                println!("{}", request.message);
                println!("[{}] ({:?}) -> POST {}", request.confirm_label, request.tone, request.form_action);
                for (name, value) in request.hidden_fields() {
                    println!("  {name}={value}");
                }
            }
        }
        Some(PanelKey::EditInvestigation) => {
            if let Some(action) = app.edit_form_action() {
                println!("Edit form -> POST {action}");
            }
        }
        _ => {}
    }
    Ok(())
}

async fn run_snapshot(
    config: VigilConfig,
    investigation: InvestigationId,
    image: &Path,
) -> Result<(), VigilError> {
    let jpeg = tokio::fs::read(image).await?;
    let mut app = VigilApp::connect(config)?;
    let before = app.strip().total();

    app.stage_frame(jpeg);
    app.dispatch(UiAction::CaptureSnapshot(investigation)).await;

    if app.strip().total() == before {
        return Err(VigilError::Investigation("capture was not saved".into()));
    }
    for url in app.strip().thumbnails() {
        println!("{url}");
    }
    println!("captures {}", app.strip().counter_label());
    Ok(())
}

async fn run_speaker(config: VigilConfig, action: SpeakerCommand) -> Result<(), VigilError> {
    let speaker = SpeakerClient::new(&config.speaker.base_url, config.server.request_timeout())?;
    let result = match action {
        SpeakerCommand::Upload { file, volume } => {
            let volume = volume.unwrap_or_else(|| config.speaker.default_volume.min(100) as u8);
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "audio".to_string());
            let audio = tokio::fs::read(&file).await?;
            println!("Uploading and sending command...");
            speaker.upload(&name, audio, volume).await
        }
        SpeakerCommand::Stop => {
            println!("Sending stop command...");
            speaker.stop().await
        }
    };
    if let Err(e) = &result {
        warn!(error = %e, "drone speaker request failed");
    }
    println!("{}", status_text(&result));
    result.map(|_| ()).map_err(VigilError::from)
}
