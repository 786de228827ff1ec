fn main() -> anyhow::Result<()> {
    log_juggler::run()
}
