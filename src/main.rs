fn main() {
    pompa::run_cli();
}
