//! End-to-end tests: owners exposing their fields through accessors.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use accessor::{
    Accessor, DirectGetter, DirectSetter, DynGetter, DynTrySetter, Error, Getter, Kind,
    MutableProperty, ReadOnlyAccessor, ReadWriteAccessor, ReadableProperty, Result, SelfStorage,
    WritableProperty, direct_get, direct_set, get_guard, make_accessor, make_read_only,
};

type Guarded<T> = Accessor<T, DynGetter<'static, T>, DynTrySetter<'static, T>>;

/// Owner storing its accessors as fields over shared state.
struct Account {
    balance: Rc<Cell<f64>>,
    num: Guarded<f64>,
    id: ReadOnlyAccessor<u32, DynGetter<'static, u32>>,
    label: SelfStorage<String>,
}

impl Account {
    fn new(id: u32, initial: f64) -> Self {
        let balance = Rc::new(Cell::new(initial));
        let (read, write) = (Rc::clone(&balance), Rc::clone(&balance));

        Self {
            num: Accessor::read_write(
                DynGetter::boxed(move || read.get()),
                DynTrySetter::boxed(move |v: f64| {
                    if v < 0.0 {
                        return Err(Error::rejected::<f64>("balance must not be negative"));
                    }
                    write.set(v);
                    Ok(())
                }),
            ),
            id: Accessor::read_only(DynGetter::boxed(move || id)),
            label: SelfStorage::new(String::new()),
            balance,
        }
    }
}

#[test]
fn test_setter_rejects_negative_values() -> Result<()> {
    let mut account = Account::new(1, 0.0);

    assert_eq!(account.num.assign(5.0_f64)?, 5.0);
    assert_eq!(account.num, 5.0_f64);

    let error = account.num.assign(-1.0_f64).unwrap_err();
    assert!(error.is_rejected());
    assert_eq!(account.num.read(), 5.0);
    assert_eq!(account.balance.get(), 5.0);

    assert_eq!(account.num.update(|v| v * 2.0)?, 10.0);
    assert!(account.num.update(|v| v - 20.0).is_err());
    assert_eq!(account.balance.get(), 10.0);
    Ok(())
}

#[test]
fn test_fields_have_expected_shapes() -> Result<()> {
    let mut account = Account::new(42, 1.0);

    assert_eq!(account.num.kind(), Kind::ReadWrite);
    assert_eq!(account.id.kind(), Kind::ReadOnly);
    assert_eq!(account.label.kind(), Kind::SelfStorage);

    assert_eq!(account.id, 42_u32);
    account.label.write(format!("account #{}", account.id))?;
    assert_eq!(*account.label, "account #42");
    Ok(())
}

#[test]
fn test_fields_interoperate() -> Result<()> {
    let mut a = Account::new(1, 3.0);
    let b = Account::new(2, 4.0);

    a.num.assign(&a.num + &b.num)?;
    assert_eq!(a.balance.get(), 7.0);

    assert!(a.num > b.num);
    assert_eq!(&b.num * &b.num, 16.0);
    assert_eq!(&b.id + 1_u32, 3);
    Ok(())
}

/// Owner building accessors on demand over its own fields.
struct Inventory {
    count: RefCell<u32>,
    tags: RefCell<Vec<String>>,
}

impl Inventory {
    fn count(
        &self,
    ) -> ReadWriteAccessor<u32, DirectGetter<'_, RefCell<u32>>, DirectSetter<'_, RefCell<u32>>> {
        make_accessor(direct_get(&self.count), direct_set(&self.count))
    }

    fn tags(&self) -> ReadOnlyAccessor<Vec<String>, impl Getter<Vec<String>> + '_> {
        make_read_only(get_guard(move || self.tags.borrow()))
    }
}

#[test]
fn test_on_demand_accessors() -> Result<()> {
    let inventory = Inventory {
        count: RefCell::new(0),
        tags: RefCell::new(vec![String::from("new")]),
    };

    let mut count = inventory.count();
    count += 3_u32;
    count.post_inc()?;
    assert_eq!(*inventory.count.borrow(), 4);

    inventory.tags.borrow_mut().push(String::from("sale"));
    assert_eq!(inventory.tags().at(1), "sale");
    assert_eq!(inventory.tags().inspect(Vec::len), 2);
    assert!(inventory.tags().inspect(|tags| tags.contains(&String::from("new"))));
    Ok(())
}
