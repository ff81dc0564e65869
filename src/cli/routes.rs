use clap::Args;
use serde_json::{json, Value};

use crate::providers::{Provider, RoutingTable};
use crate::server::{self, Dispatch};

#[derive(Args)]
pub struct RoutesCommand {
    /// Show where a request with this `model` value would be sent
    #[arg(long)]
    pub model: Option<String>,
}

pub async fn handle(cmd: RoutesCommand) -> anyhow::Result<()> {
    let table = RoutingTable::builtin();

    println!("\nRouting table:\n");
    for (provider, base_url) in table.entries() {
        let note = if provider == Provider::Default { "  (fallback)" } else { "" };
        println!("  {:<10} {}{}", provider.key(), base_url, note);
    }

    if let Some(model) = cmd.model {
        let (dispatch, forwarded) = preview(&table, &model)?;
        println!("\nmodel \"{}\":", model);
        println!("  provider: {}", dispatch.provider);
        println!("  upstream: {}", table.base_url(dispatch.provider));
        println!("  model:    {}", forwarded);
    }

    Ok(())
}

/// Run a `model` value through the same resolution a JSON POST gets and
/// report the model name the upstream would see.
fn preview(table: &RoutingTable, model: &str) -> anyhow::Result<(Dispatch, String)> {
    let payload = serde_json::to_vec(&json!({ "model": model }))?;
    let dispatch = server::resolve(table, &payload);

    let forwarded = match &dispatch.body {
        Some(body) => serde_json::from_slice::<Value>(body)?
            .get("model")
            .and_then(|m| m.as_str())
            .unwrap_or(model)
            .to_string(),
        None => model.to_string(),
    };

    Ok((dispatch, forwarded))
}
