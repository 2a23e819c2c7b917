use std::{cell::Cell, rc::Rc};

use accessor::{
    Accessor, DynGetter, DynTrySetter, Error, MutableProperty, ReadableProperty, Result,
    SelfStorage, WritableProperty,
};

struct Thermostat {
    target: Accessor<f64, DynGetter<'static, f64>, DynTrySetter<'static, f64>>,
    room: SelfStorage<String>,
}

impl Thermostat {
    fn new(room: &str) -> Self {
        let celsius = Rc::new(Cell::new(20.0));
        let read = Rc::clone(&celsius);

        Self {
            target: Accessor::read_write(
                DynGetter::boxed(move || read.get()),
                DynTrySetter::boxed(move |v: f64| {
                    if !(5.0..=30.0).contains(&v) {
                        return Err(Error::rejected::<f64>(format!("{v} is outside 5..=30")));
                    }
                    celsius.set(v);
                    Ok(())
                }),
            ),
            room: SelfStorage::new(room.to_owned()),
        }
    }
}

fn main() -> Result<()> {
    let mut thermostat = Thermostat::new("kitchen");

    println!("{}: {}", thermostat.room, thermostat.target);

    thermostat.target.assign(22.5_f64)?;
    thermostat.target.post_inc()?;
    println!("{}: {}", thermostat.room, thermostat.target);

    if let Err(error) = thermostat.target.assign(40.0_f64) {
        println!("{error}");
    }
    println!("{}: {} (unchanged)", thermostat.room, thermostat.target.read());

    thermostat.room.write(String::from("living room"))?;
    println!("{}: {}", thermostat.room, thermostat.target);

    Ok(())
}
