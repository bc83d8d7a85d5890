//! Keeps a bounded list of sensor readings in a `StaticVec`.
//!
//! Run with `cargo run -p estl-foundation --example sensor_vector`.

use estl_foundation::{algorithm, Result, StaticVec};

#[derive(Debug, Clone, Copy)]
struct Sensor {
    id:          u8,
    temperature: f32,
    active:      bool,
}

impl Sensor {
    const fn new(id: u8, temperature: f32, active: bool) -> Self {
        Self {
            id,
            temperature,
            active,
        }
    }
}

fn print_sensors(title: &str, sensors: &[Sensor]) {
    println!("{title}");
    for sensor in sensors {
        println!(
            "  sensor {:>2}: {:5.1} C {}",
            sensor.id,
            sensor.temperature,
            if sensor.active { "active" } else { "idle" }
        );
    }
}

fn main() -> Result<()> {
    let mut sensors = StaticVec::<Sensor, 10>::new();

    sensors.push(Sensor::new(1, 22.5, true))?;
    sensors.push(Sensor::new(2, 25.1, true))?;
    sensors.push(Sensor::new(3, 18.7, false))?;
    print_sensors("initial:", &sensors);

    sensors.insert(1, Sensor::new(4, 30.2, true))?;
    print_sensors("after inserting sensor 4 at index 1:", &sensors);

    let removed = sensors.remove(2)?;
    println!("removed sensor {}", removed.id);

    let active = algorithm::count_if(&sensors, |sensor| sensor.active);
    println!("{active} of {} sensors active (capacity {})", sensors.len(), sensors.capacity());

    if let Some(index) = algorithm::max_element_by(&sensors, |a, b| a.temperature < b.temperature) {
        println!("hottest: sensor {}", sensors[index].id);
    }

    algorithm::insertion_sort_by(&mut sensors, |a, b| a.temperature < b.temperature);
    print_sensors("sorted by temperature:", &sensors);

    sensors.clear();
    println!("cleared, empty: {}", sensors.is_empty());
    Ok(())
}
