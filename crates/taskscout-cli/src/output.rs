//! Console rendering for scan results and the earnings report.

use std::fmt::Write;

use taskscout_core::Task;
use taskscout_core::app::EarningsReport;

pub fn render_tasks(tasks: &[Task], limit: usize) -> String {
    if tasks.is_empty() {
        return "No new suitable tasks found\n".to_string();
    }

    let mut out = format!("Found {} suitable tasks:\n", tasks.len());
    for (i, task) in tasks.iter().take(limit).enumerate() {
        let _ = write!(
            out,
            "\n{}. {}\n   id: {}\n   reward: {}\n   ai score: {:.1}/10\n   est. time: {:.1}h\n   roi: {:.0}/hour\n   type: {}\n",
            i + 1,
            task.title(),
            task.id(),
            task.reward(),
            task.ai_score(),
            task.estimated_hours(),
            task.roi(),
            task.task_type(),
        );
    }
    out
}

/// Shorten a wallet address to `head...tail`.
pub fn short_wallet(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() <= 18 {
        return wallet.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{head}...{tail}")
}

pub fn render_report(wallet: &str, report: &EarningsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== taskscout earnings report ({}) ==", report.session_id);
    let _ = writeln!(out, "wallet:          {}", short_wallet(wallet));
    let _ = writeln!(out, "runtime:         {:.1} hours", report.runtime_hours);
    let _ = writeln!(out, "tasks monitored: {}", report.tasks_monitored);
    let _ = writeln!(out, "tasks completed: {}", report.tasks_completed);
    let _ = writeln!(out, "total earned:    {}", report.total_earned);
    let _ = writeln!(out, "per hour:        {:.2}", report.earned_per_hour);
    let _ = writeln!(out, "success rate:    {:.1}%", report.success_rate_pct);
    let _ = writeln!(out, "avg reward:      {:.0}", report.avg_reward);
    if !report.recent.is_empty() {
        let _ = writeln!(out, "recent completions:");
        for c in &report.recent {
            let _ = writeln!(out, "  - {} ({})", c.title, c.reward);
        }
    }
    out
}
