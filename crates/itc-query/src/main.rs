mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{bail, eyre, WrapErr};
use serde::Serialize;

use itc_core::numbers::to_plain_string;
use itc_core::rpc::RpcConfig;
use itc_core::types::BlockOptions;
use itc_core::{intelli_to_itc, is_valid_address, itc_to_intelli, methods, CoreError, Node, RpcError};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let Some(online) = run_offline(args.command)? else {
        return Ok(());
    };

    let config = RpcConfig::new(&args.rpc_url, Duration::from_secs(args.timeout))
        .context("invalid --rpc-url or --timeout")?;
    let node = Node::new(config).context("build RPC client")?;
    tracing::debug!(rpc.endpoint = %node.endpoint(), timeout = ?node.timeout(), "using node");

    run(&node, online)
        .await
        .map_err(|err| describe_failure(&args.rpc_url, err))
}

/// Execute `command` if it needs no node; otherwise hand it back as an
/// [`Online`] command.
fn run_offline(command: Command) -> eyre::Result<Option<Online>> {
    let online = match command {
        Command::ToItc { value } => {
            let itc = intelli_to_itc(value.as_str()).context("convert INTELLI to ITC")?;
            println!("{}", to_plain_string(&itc)?);
            return Ok(None);
        }
        Command::ToIntelli { value } => {
            let intelli = itc_to_intelli(value.as_str()).context("convert ITC to INTELLI")?;
            println!("{}", to_plain_string(&intelli)?);
            return Ok(None);
        }
        Command::Methods => {
            for method in methods::ALL {
                println!("{method}");
            }
            return Ok(None);
        }
        Command::Status => Online::Status,
        Command::Block { number, full_tx } => Online::Block { number, full_tx },
        Command::Balance {
            address,
            all_shards,
        } => Online::Balance {
            address,
            all_shards,
        },
        Command::Raw { method, params } => Online::Raw { method, params },
    };
    Ok(Some(online))
}

/// Subcommands that talk to the node.
#[derive(Debug, PartialEq, Eq)]
enum Online {
    Status,
    Block { number: u64, full_tx: bool },
    Balance { address: String, all_shards: bool },
    Raw { method: String, params: Vec<String> },
}

#[derive(Serialize)]
struct Status {
    chain_id: u64,
    block_number: u64,
    epoch: u64,
    peers: u64,
    in_sync: bool,
}

#[derive(Serialize)]
struct ShardLine {
    shard: u32,
    balance_itc: Option<String>,
}

async fn run(node: &Node, command: Online) -> eyre::Result<()> {
    match command {
        Online::Status => {
            let (chain_id, block_number, epoch, peers, in_sync) = tokio::try_join!(
                node.chain_id(),
                node.get_block_number(),
                node.get_current_epoch(),
                node.get_num_peers(),
                node.in_sync(),
            )?;
            tracing::info!(chain_id, block_number, epoch, "connected to Intelchain node");
            print_json(&Status {
                chain_id,
                block_number,
                epoch,
                peers,
                in_sync,
            })?;
        }
        Online::Block { number, full_tx } => {
            let options = BlockOptions {
                include_tx: true,
                full_tx,
                ..BlockOptions::default()
            };
            let block = node.get_block_by_number(number, options).await?;
            print_json(&block)?;
        }
        Online::Balance {
            address,
            all_shards,
        } => {
            if !is_valid_address(&address) {
                bail!("`{address}` is not a valid one1 address");
            }
            if all_shards {
                let balances = node.get_balance_on_all_shards(&address, false).await?;
                let mut lines = Vec::with_capacity(balances.len());
                for entry in balances {
                    if entry.balance.is_none() {
                        tracing::warn!(shard = entry.shard, "shard balance unavailable");
                    }
                    let balance_itc = entry.balance.map(format_itc).transpose()?;
                    lines.push(ShardLine {
                        shard: entry.shard,
                        balance_itc,
                    });
                }
                print_json(&lines)?;
            } else {
                let intelli = node.get_balance(&address).await?;
                println!("{}", format_itc(intelli)?);
            }
        }
        Online::Raw { method, params } => {
            let params = params.iter().map(|p| parse_param(p)).collect();
            let reply = node.request(&method, params).await?;
            print_json(&reply)?;
        }
    }
    Ok(())
}

fn format_itc(intelli: u128) -> eyre::Result<String> {
    let itc = intelli_to_itc(intelli)?;
    Ok(to_plain_string(&itc)?)
}

/// JSON when it parses, otherwise the bare word as a string.
fn parse_param(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let text = serde_json::to_string_pretty(value).context("encode output as JSON")?;
    println!("{text}");
    Ok(())
}

/// Attach a connection hint when the node could not be reached.
fn describe_failure(rpc_url: &str, err: eyre::Report) -> eyre::Report {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Rpc(rpc @ (RpcError::RequestFailed { .. } | RpcError::Timeout { .. }))) => {
            let message = format_rpc_connect_error(rpc_url, &error_chain(rpc));
            eyre!(message).wrap_err("while querying the Intelchain node")
        }
        _ => err,
    }
}

/// `err` followed by the causes its own message does not already include.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source().and_then(|direct| direct.source());
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn format_rpc_connect_error(rpc_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not query RPC endpoint `{rpc_url}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("timed out") {
        lines.push(
            "hint: the node did not answer in time; raise --timeout or check that it is not overloaded"
                .into(),
        );
    } else if source_error.contains("Connection refused") || source_error.contains("connection refused") {
        lines.push(
            "hint: nothing is listening there; start the node or point --rpc-url (ITC_RPC_URL) at a running one"
                .into(),
        );
    } else if source_error.contains("dns error") || source_error.contains("failed to lookup address") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("tls")
        || source_error.contains("certificate")
        || source_error.contains("SSL")
    {
        lines.push(
            "hint: TLS handshake failed; verify certificate trust and that the endpoint uses HTTPS"
                .into(),
        );
    } else if source_error.contains("404") {
        lines.push("hint: endpoint path is invalid; the JSON-RPC server listens on the root path".into());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_commands_run_without_a_node() {
        assert_eq!(run_offline(Command::Methods).expect("methods must list"), None);
        let converted = run_offline(Command::ToItc {
            value: "1500000000000000000".into(),
        })
        .expect("conversion must succeed");
        assert_eq!(converted, None);
    }

    #[test]
    fn online_commands_are_handed_back() {
        assert_eq!(
            run_offline(Command::Status).expect("status is online"),
            Some(Online::Status)
        );
        assert_eq!(
            run_offline(Command::Raw {
                method: "itcv2_blockNumber".into(),
                params: vec!["1".into()],
            })
            .expect("raw is online"),
            Some(Online::Raw {
                method: "itcv2_blockNumber".into(),
                params: vec!["1".into()],
            })
        );
    }

    #[test]
    fn conversion_with_unprintable_exponent_fails() {
        let err = run_offline(Command::ToItc {
            value: "1e4294967314".into(),
        })
        .expect_err("huge exponent must not print");
        assert!(err.to_string().contains("too many digits"), "{err}");
    }

    #[test]
    fn balances_render_in_itc() {
        assert_eq!(format_itc(1_500_000_000_000_000_000).unwrap(), "1.5");
        assert_eq!(format_itc(0).unwrap(), "0");
    }

    #[test]
    fn params_parse_as_json_or_fall_back_to_strings() {
        assert_eq!(parse_param("12"), serde_json::json!(12));
        assert_eq!(parse_param("true"), serde_json::json!(true));
        assert_eq!(parse_param(r#"{"fullTx":true}"#), serde_json::json!({"fullTx": true}));
        assert_eq!(parse_param("\"latest\""), serde_json::json!("latest"));
        assert_eq!(parse_param("latest"), serde_json::json!("latest"));
        assert_eq!(
            parse_param("one1pdv9lrdwl0rg5vglh4xtyrv3wjk3wsqket7zxy"),
            serde_json::json!("one1pdv9lrdwl0rg5vglh4xtyrv3wjk3wsqket7zxy")
        );
    }

    #[test]
    fn connect_error_hints_at_refused_connection() {
        let message = format_rpc_connect_error(
            "http://localhost:9500",
            "request failed: tcp connect error: Connection refused (os error 111)",
        );
        assert!(message.contains("`http://localhost:9500`"));
        assert!(message.contains("hint: nothing is listening there"));
    }

    #[test]
    fn connect_error_hints_at_timeout() {
        let message = format_rpc_connect_error(
            "https://api.s0.t.intelchain.org",
            "request to https://api.s0.t.intelchain.org timed out after 30s",
        );
        assert!(message.contains("raise --timeout"));
    }

    #[test]
    fn connect_error_without_known_cause_has_no_hint() {
        let message = format_rpc_connect_error("http://localhost:9500", "something odd");
        assert_eq!(message.lines().count(), 2);
    }

    #[test]
    fn invalid_reply_is_passed_through_without_hint() {
        let err = eyre::Report::new(CoreError::invalid_reply("itcv2_blockNumber", "http://localhost:9500"));
        let described = describe_failure("http://localhost:9500", err);
        assert!(described.to_string().contains("itcv2_blockNumber"));
    }
}
