use graticule_graduation::{ScaleEngine, TickRole};

fn main() {
    env_logger::init();

    let engine = ScaleEngine::default();

    // a slider configured for [0, 100] with up to 10 major and 4 minor steps
    let tickmarks = engine.divide_scale(0.0, 100.0, 10, 4, None);
    for role in TickRole::ALL {
        println!("{role:?}: {:?}", tickmarks.ticks(role));
    }

    // let the engine pick and align the range of a dial showing raw data
    let auto = engine.auto_scale(8, 3.7, 94.2);
    println!(
        "auto-scaled range: [{}, {}] step {}",
        auto.x1, auto.x2, auto.step_size
    );

    let tickmarks = engine.divide_scale(auto.x1, auto.x2, 8, 5, Some(auto.step_size));
    println!("major: {:?}", tickmarks.major_ticks());
}
