use anyhow::Context;
use kyopro_templates::judge::StdioJudge;
use kyopro_templates::solver;

fn main() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut judge =
        StdioJudge::new(stdin.lock(), stdout.lock()).context("Failed to read vertex count")?;
    let ok = solver::solve(&mut judge).context("Session aborted")?;
    if ok {
        eprintln!("!log status AC");
    } else {
        eprintln!("!log status WA");
    }
    Ok(())
}
