use super::Context;

pub fn run(ctx: &Context, format: &str) -> Result<(), String> {
    let director = ctx.open()?;
    let journal = director.playhouse().journal();

    let out = match format {
        "text" | "txt" => journal.export_text(),
        "markdown" | "md" => journal.export_markdown(),
        other => {
            return Err(format!(
                "unknown format '{other}' (expected text or markdown)"
            ));
        }
    };
    print!("{out}");

    Ok(())
}
