fn main() -> eframe::Result {
    sprout::run_gui()
}
