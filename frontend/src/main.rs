//! Entry point for the WASM application

pub fn main() {
    imgdrop_frontend::start()
}
