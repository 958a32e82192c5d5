use anyhow::Result;
use smartrx_core::user::UserSession;

pub fn show(session: &UserSession, json: bool) -> Result<()> {
    let snapshot = session.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("User:          {} <{}>", snapshot.data.user_name, snapshot.data.user_email);
    println!("Role:          {}", snapshot.data.user_role);
    println!("Plan:          {}", snapshot.data.current_plan);
    println!(
        "Credits:       {} / {} ({}%)",
        snapshot.data.credit_spent,
        snapshot.data.credit_limit,
        snapshot.credit_usage_percentage.round_dp(1)
    );
    println!("Control panel: {}", snapshot.control_panel_route);
    Ok(())
}
