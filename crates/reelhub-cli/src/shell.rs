//! The interactive shell: reads path-like commands, dispatches them
//! through the router, and renders the alert queue after every step.

use dialoguer::Input;

use reelhub_core::error::AppError;
use reelhub_core::result::AppResult;
use reelhub_session::guard::PUBLIC_ROOT;

use crate::context::AppContext;
use crate::flows::Nav;
use crate::{output, router};

/// Run the shell until the user quits.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    println!("ReelHub. Type a path to navigate, `help` for commands.");

    let mut path = PUBLIC_ROOT.to_string();
    let mut nav = Nav::To(path.clone());

    loop {
        // Follow navigation until a view settles, rendering every hop.
        while let Nav::To(next) = nav {
            path = next;
            nav = router::dispatch(ctx, &path).await?;
        }

        output::render_alerts(&ctx.alerts.alerts());

        let command: String = Input::new()
            .with_prompt(format!("reelhub {path}"))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
        let command = command.trim();

        nav = if command.is_empty() {
            Nav::Stay
        } else if command == "quit" || command == "exit" {
            break;
        } else if command == "help" {
            print_help();
            Nav::Stay
        } else if let Some(arg) = command.strip_prefix("dismiss") {
            dismiss(ctx, arg);
            Nav::Stay
        } else if command.starts_with('/') {
            Nav::To(command.to_string())
        } else {
            output::print_warning("Enter a path like /movies, or `help`.");
            Nav::Stay
        };
    }

    Ok(())
}

/// Dismiss the alert at the given render index.
fn dismiss(ctx: &AppContext, arg: &str) {
    match arg.trim().parse::<usize>() {
        Ok(index) => {
            let alerts = ctx.alerts.alerts();
            match alerts.get(index) {
                Some(alert) => ctx.alerts.request_dismiss(alert.id),
                None => output::print_warning(&format!("No alert at index {index}")),
            }
        }
        Err(_) => output::print_warning("Usage: dismiss <index>"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /<path>          navigate (e.g. /movies, /movies/42/edit)");
    println!("  dismiss <n>      dismiss the alert shown at index n");
    println!("  help             show this message");
    println!("  quit             exit");
}
