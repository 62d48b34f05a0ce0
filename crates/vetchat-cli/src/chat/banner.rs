//! Welcome banner printed when the client starts.

use console::style;

/// Print the welcome banner after the connection is established.
pub fn print_welcome_banner(server_url: &str, user_id: &str, job_id: &str) {
    println!();
    println!("  {}", style("vetchat").cyan().bold());
    println!("  {}", style("Job applicant screening chat").dim());
    println!();
    println!("  {}  {}", style("Server:").bold(), style(server_url).dim());
    println!("  {}  {}", style("User:").bold(), style(user_id).dim());
    println!("  {}  {}", style("Job:").bold(), style(job_id).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
