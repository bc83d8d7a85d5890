//! Keeps a registry of devices keyed by address in a `StaticMap`.
//!
//! Run with `cargo run -p estl-foundation --example device_map`.

use estl_foundation::{iter, Result, StaticMap};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DeviceInfo {
    name:   &'static str,
    status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Online,
    Offline,
    Fault,
}

fn print_devices(title: &str, devices: &StaticMap<u16, DeviceInfo, 8>) {
    println!("{title}");
    for (address, device) in devices {
        println!("  0x{address:04X}: {:<12} {:?}", device.name, device.status);
    }
}

fn main() -> Result<()> {
    let mut devices = StaticMap::<u16, DeviceInfo, 8>::new();

    devices.insert(0x0030, DeviceInfo { name: "pump", status: Status::Online })?;
    devices.insert(0x0010, DeviceInfo { name: "thermostat", status: Status::Online })?;
    devices.insert(0x0020, DeviceInfo { name: "valve", status: Status::Offline })?;
    print_devices("registered devices:", &devices);

    let (_, inserted) = devices.insert(0x0010, DeviceInfo { name: "duplicate", status: Status::Fault })?;
    println!("re-registering 0x0010 inserted a new entry: {inserted}");

    if let Some(device) = devices.get_mut(&0x0020) {
        device.status = Status::Online;
    }
    devices.at_mut(&0x0030)?.status = Status::Fault;
    print_devices("after status updates:", &devices);

    let (first, last) = (devices.lower_bound(&0x0015), devices.upper_bound(&0x0030));
    let in_range: Vec<&str> = iter::between(first, last).map(|(_, device)| device.name).collect();
    println!("devices in 0x0015..=0x0030: {in_range:?}");

    println!("erased 0x0020: {}", devices.erase(&0x0020));
    println!("0x0020 still present: {}", devices.contains_key(&0x0020));
    print_devices("final registry:", &devices);
    Ok(())
}
