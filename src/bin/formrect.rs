use std::io;

use formrect::io::read_instance;
use formrect::utils::format_area;
use formrect::CoverEngine;

fn main() {
    let instance = match read_instance(io::stdin().lock()) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("formrect: {err}");
            std::process::exit(2);
        }
    };

    let engine = match CoverEngine::new(instance.points, instance.k) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("formrect: {err}");
            std::process::exit(2);
        }
    };

    println!("{}", format_area(engine.run()));
}
