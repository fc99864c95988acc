fn main() {
    strategies_structure::run_cli();
}
