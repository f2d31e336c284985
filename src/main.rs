use clap::Parser;
use shop_search::{cli, client, config, error, prompt, render};
use cli::{Cli, Commands};
use client::HttpBackend;
use config::Config;
use error::{Result, ShopSearchError};
use shop_search_common::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search { query, select, all, list_only, json } => {
            let config = Config::load()?;
            let backend = HttpBackend::new(&config)?;
            let query = match query {
                Some(q) => q,
                None => prompt::prompt_query()?,
            };
            let mut state = AppState::default();

            if !json {
                println!("🍜 shop-search - 飲食店サーチ\n");
                println!("[1/2] 初回サーチ中... ({})", backend.base_url());
            }

            // 1. 初回サーチ
            let spinner = render::spinner("Grounding Search 実行中", json);
            let ok = state.run_search(&backend, &query).await;
            spinner.finish_and_clear();
            if !ok {
                return Err(ShopSearchError::Flow(state.ui.error_message.clone()));
            }

            if let (false, Some(result)) = (json, state.current.as_ref()) {
                print!("{}", render::format_search_result(result));
                println!("✔ {}件の店舗を取得\n", state.checklist.len());
            }

            if list_only || state.checklist.is_empty() {
                if json {
                    print_json(&state)?;
                }
                return Ok(());
            }

            // 2. 店舗選択
            let indices = match prompt::resolve_selection(&select, all, state.checklist.len())? {
                Some(indices) => indices,
                None => prompt::prompt_shops(state.checklist.entries())?,
            };
            let generation = state.checklist.generation();
            for index in indices {
                state.set_shop_checked(generation, index, true);
            }
            tracing::info!(selected = state.checklist.checked_count(), "shops selected");

            // 3. 個別サーチ
            if !json {
                println!("[2/2] 個別サーチ中... ({}店舗)", state.checklist.checked_count());
            }
            let spinner = render::spinner("個別サーチ・合致度判定中", json);
            let ok = state.run_detail(&backend).await;
            spinner.finish_and_clear();
            if !ok {
                return Err(ShopSearchError::Flow(state.ui.error_message.clone()));
            }

            if json {
                print_json(&state)?;
            } else {
                for panel in state.detail.panels() {
                    print!("{}", render::format_panel(panel));
                }
                print!("{}", render::format_summary_table(state.detail.rows()));
                println!("\n✅ 完了");
            }
        }

        Commands::Health => {
            let config = Config::load()?;
            let backend = HttpBackend::new(&config)?;
            let status = backend.health().await?;
            println!("接続先: {}", backend.base_url());
            println!("  状態:     {}", status.status);
            println!("  サービス: {}", status.service);
            println!("  モデル:   {}", status.model);
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = Config::load_or_default()?;
            let changed = set_base_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を設定しました: {}", config.base_url);
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました: {}秒", config.timeout_seconds);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先:       {}", config.base_url);
                println!("  実際の接続先: {}", config.resolved_base_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn print_json(state: &AppState) -> Result<()> {
    if let Some(output) = render::JsonOutput::from_state(state) {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
