use almanac::{
    apparent_sidereal_time, astronomical_easter, equinox_solstice, lunar_phase,
    sun_rise_transit_set, ClockTime, JulianDay, Observer, PhaseKind, SeasonKind, JD, JDE, MJD,
};
use chrono::Utc;

fn main() {
    let now = JulianDay::from_utc(Utc::now());
    println!("JD:  {now}");
    println!("JDE: {}", now.to::<JDE>());
    println!("MJD: {}", now.to::<MJD>());
    println!("ΔT:  {}", now.delta_t());

    let today = now.to_calendar_date().expect("current date");
    for kind in SeasonKind::ALL {
        let instant = equinox_solstice(today.year, kind).to::<JD>();
        println!(
            "{kind}: {}",
            instant.to_calendar_date().expect("season date")
        );
    }

    let year = f64::from(today.year) + (f64::from(today.month) - 1.0) / 12.0;
    for kind in PhaseKind::ALL {
        println!("{kind}: {}", lunar_phase(year, kind).to::<JD>());
    }

    match astronomical_easter(today.year) {
        Ok(easter) => {
            let date = easter.to_calendar_date().expect("easter date");
            println!("Easter: {date}");
        }
        Err(err) => println!("Easter: {err}"),
    }

    let greenwich = Observer::new(0.0, 51.4769);
    match sun_rise_transit_set(&greenwich, now) {
        Ok(day) => {
            let (rise, transit, set) = day.clock_times();
            println!("Greenwich sunrise {rise}, noon {transit}, sunset {set} UT");
        }
        Err(err) => println!("Greenwich: {err}"),
    }
    let sidereal = ClockTime::from_degrees(apparent_sidereal_time(now).value());
    println!("sidereal clock: {sidereal}");
}
