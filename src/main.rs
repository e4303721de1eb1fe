fn main() {
    ice_strap::app::cli::run();
}
