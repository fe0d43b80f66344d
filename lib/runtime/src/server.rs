// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! HTTP listener used by every mock service.
//!
//! Connections are accepted on a tokio listener and each one is served on its
//! own task through hyper's auto (HTTP/1 + HTTP/2) connection builder. HTTP/1
//! request headers must arrive within [`READ_HEADER_TIMEOUT`], which bounds the
//! resources a slow client can hold. Cancelling the token stops the accept loop
//! and asks open connections to finish their in-flight request and close.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder;
use hyper_util::service::TowerToHyperService;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::config::normalize_listen_addr;
use crate::logging::make_request_span;

/// Maximum time allowed for a client to send its request headers
pub const READ_HEADER_TIMEOUT: Duration = Duration::from_secs(3);

/// A bound, not yet running, HTTP server
pub struct HttpServer {
    name: &'static str,
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
}

impl HttpServer {
    /// Bind `addr` (`host:port` or `:port`) and prepare `app` for serving.
    ///
    /// Binding is the only fallible step; a service that cannot bind should exit.
    pub async fn bind(name: &'static str, addr: &str, app: Router) -> anyhow::Result<Self> {
        let address = normalize_listen_addr(addr);
        tracing::debug!("[{name}] binding to: {address}");

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("[{name}] failed to bind to address {address}"))?;
        let local_addr = listener.local_addr()?;

        let app = app.layer(TraceLayer::new_for_http().make_span_with(make_request_span));

        Ok(Self {
            name,
            listener,
            local_addr,
            app,
        })
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Accept connections until `cancel_token` is cancelled.
    pub async fn serve(self, cancel_token: CancellationToken) {
        let HttpServer {
            name,
            listener,
            local_addr,
            app,
        } = self;

        tracing::info!("[{name}] listening on {local_addr}");

        loop {
            let (stream, remote_addr) = tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!("[{name}] accept failed: {e}");
                        continue;
                    }
                },
                _ = cancel_token.cancelled() => break,
            };

            tracing::trace!(%remote_addr, "[{name}] accepted connection");
            tokio::spawn(serve_connection(
                stream,
                app.clone(),
                cancel_token.child_token(),
            ));
        }

        tracing::info!("[{name}] server stopped");
    }

    /// Spawn the accept loop in the background and return the bound address and
    /// the task handle.
    pub fn spawn(self, cancel_token: CancellationToken) -> (SocketAddr, JoinHandle<()>) {
        let local_addr = self.local_addr;
        let handle = tokio::spawn(self.serve(cancel_token));
        (local_addr, handle)
    }
}

async fn serve_connection(stream: TcpStream, app: Router, cancel_token: CancellationToken) {
    let service = TowerToHyperService::new(app);

    let mut builder = Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(READ_HEADER_TIMEOUT);

    let conn = builder.serve_connection_with_upgrades(TokioIo::new(stream), service);
    tokio::pin!(conn);

    let mut shutting_down = false;
    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(e) = result {
                    tracing::debug!("connection closed with error: {e}");
                }
                break;
            }
            _ = cancel_token.cancelled(), if !shutting_down => {
                shutting_down = true;
                conn.as_mut().graceful_shutdown();
            }
        }
    }
}

/// Bind `addr`, serve `app` and stop on Ctrl-C.
///
/// This is the whole life of a mock service binary. Bind failures are returned
/// to the caller, which logs them and exits non-zero.
pub async fn serve_until_shutdown(name: &'static str, addr: &str, app: Router) -> anyhow::Result<()> {
    let server = HttpServer::bind(name, addr, app).await?;
    let cancel_token = CancellationToken::new();

    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("[{name}] received Ctrl-C, shutting down");
                signal_token.cancel();
            }
            Err(e) => tracing::error!("[{name}] failed to listen for Ctrl-C: {e}"),
        }
    });

    server.serve(cancel_token).await;
    Ok(())
}
