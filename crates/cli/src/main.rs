fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    gachapull_cli::run_with_args(&args)
}
