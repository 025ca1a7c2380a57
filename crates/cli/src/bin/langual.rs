use anyhow::Result;

fn main() -> Result<()> {
    langual_cli::main_entry()
}
