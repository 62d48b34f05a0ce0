//! Main chat loop orchestration.
//!
//! Coordinates the complete session lifecycle: connect, welcome banner,
//! the opening `start_conversation` request, then the receiver task and
//! the input loop running concurrently over shared session state until
//! either side stops it.

use std::time::Duration;

use anyhow::Context;
use console::style;
use rustyline_async::SharedWriter;
use tracing::debug;

use vetchat_core::Session;
use vetchat_infra::ws::{self, WsReceiver, WsSender};

use super::banner::print_welcome_banner;
use super::commands::{self, Command};
use super::input::{ChatInput, InputEvent};
use super::renderer::StreamRenderer;

/// Grace period after the opening request so the greeting starts streaming
/// before the prompt is drawn. Cosmetic only.
const GREETING_GRACE: Duration = Duration::from_millis(100);

/// Run the interactive chat session until it stops.
///
/// Connecting is the only fatal step. Past it, the connection close runs
/// no matter how the session ends.
pub async fn run_chat(server_url: &str, user_id: &str, job_id: &str) -> anyhow::Result<()> {
    let (mut sender, receiver) = ws::connect(server_url)
        .await
        .context("could not reach the screening server")?;
    println!(
        "  {} Connected to {}",
        style("\u{2713}").green().bold(),
        style(server_url).cyan()
    );

    let result = drive(&mut sender, receiver, server_url, user_id, job_id).await;
    let _ = sender.close().await;
    println!("\n  {}", style("Disconnected from server").dim());
    result
}

/// Everything between connect and teardown.
async fn drive(
    sender: &mut WsSender,
    receiver: WsReceiver,
    server_url: &str,
    user_id: &str,
    job_id: &str,
) -> anyhow::Result<()> {
    print_welcome_banner(server_url, user_id, job_id);

    let session = Session::new();
    sender
        .send(&session.start_request(user_id, job_id))
        .await
        .context("failed to start the conversation")?;
    println!(
        "  {}",
        style(format!(
            "Started conversation (userId: {user_id}, jobId: {job_id})"
        ))
        .dim()
    );

    tokio::time::sleep(GREETING_GRACE).await;

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, writer) = ChatInput::new(prompt)
        .map_err(|err| anyhow::anyhow!("failed to initialize input: {err}"))?;

    let receiver_task = tokio::spawn(receiver_loop(
        receiver,
        session.clone(),
        StreamRenderer::new(writer.clone()),
    ));

    let mut renderer = StreamRenderer::new(writer);
    input_loop(&mut input, sender, &session, &mut renderer).await;

    session.stop();
    let _ = receiver_task.await;
    debug!("chat loops stopped");
    Ok(())
}

/// Receive inbound frames and render them until the session stops.
///
/// Stops itself on a terminal update, a peer close, or a receive/decode
/// failure, and propagates that through the shared running flag so the
/// input loop notices promptly.
async fn receiver_loop(
    mut receiver: WsReceiver,
    session: Session,
    mut renderer: StreamRenderer<SharedWriter>,
) {
    loop {
        let frame = tokio::select! {
            _ = session.stopped() => break,
            frame = receiver.next() => frame,
        };

        match frame {
            Some(Ok(envelope)) => {
                let update = session.apply(envelope);
                renderer.render(&update);
                if !session.is_running() {
                    break;
                }
            }
            Some(Err(err)) => {
                renderer.report_error(&err.to_string());
                session.stop();
                break;
            }
            None => {
                renderer.report_error("Connection closed by server");
                session.stop();
                break;
            }
        }
    }
}

/// Read user lines and dispatch commands or chat messages until the
/// session stops.
async fn input_loop(
    input: &mut ChatInput,
    sender: &mut WsSender,
    session: &Session,
    renderer: &mut StreamRenderer<SharedWriter>,
) {
    loop {
        let event = tokio::select! {
            _ = session.stopped() => break,
            event = input.read_line() => event,
        };

        match event {
            InputEvent::Eof => {
                renderer.notice("Session ended.");
                session.stop();
                break;
            }
            InputEvent::Interrupted => {
                renderer.farewell();
                session.stop();
                break;
            }
            InputEvent::Line(text) => {
                if text.is_empty() {
                    continue;
                }
                match commands::parse(&text) {
                    Some(Command::Quit) => {
                        renderer.farewell();
                        session.stop();
                        break;
                    }
                    Some(Command::Help) => commands::print_help(renderer.writer()),
                    Some(Command::End) => match session.end_request() {
                        Ok(envelope) => match sender.send(&envelope).await {
                            Ok(()) => renderer.notice("Ended conversation"),
                            Err(err) => renderer.report_error(&err.to_string()),
                        },
                        Err(_) => renderer.warn("No active conversation."),
                    },
                    None => match session.message_request(&text) {
                        Ok(envelope) => {
                            if let Err(err) = sender.send(&envelope).await {
                                renderer.report_error(&err.to_string());
                            }
                        }
                        Err(_) => {
                            renderer.warn("No active conversation. Start a conversation first.");
                        }
                    },
                }
            }
        }
    }
}
