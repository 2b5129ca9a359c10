use modforge_core::slash_command::render_help;

pub fn run() {
    print!("{}", render_help());
}
