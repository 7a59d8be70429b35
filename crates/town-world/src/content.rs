//! The shipped town map.
//!
//! Residential blocks on the left, the main street down the middle,
//! shops and the cinema beside it, offices on the right and the park along
//! the bottom.  Desk labels matter: jobs find their workstations by label
//! keyword (see `town_schedule::CompanyType::desk_keyword`).

use crate::{CatalogBuilder, ObjectCatalog, Rect, Utility, WorldResult};

/// Build the default town.
pub fn default_town() -> WorldResult<ObjectCatalog> {
    let mut b = CatalogBuilder::new();
    rooms(&mut b);
    homes(&mut b);
    downtown(&mut b);
    offices(&mut b);
    park(&mut b);
    b.build()
}

fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}

fn rooms(b: &mut CatalogBuilder) {
    for (name, rect) in [
        ("Apt 101 bedroom",     r(20.0, 20.0, 140.0, 120.0)),
        ("Apt 101 living room", r(20.0, 140.0, 140.0, 140.0)),
        ("Apt 101 bathroom",    r(160.0, 20.0, 80.0, 100.0)),
        ("Apt 101 kitchen",     r(160.0, 120.0, 80.0, 100.0)),
        ("Apt 102 studio",      r(20.0, 300.0, 160.0, 160.0)),
        ("Apt 102 bathroom",    r(180.0, 300.0, 60.0, 100.0)),
        ("Villa living room",   r(260.0, 20.0, 180.0, 160.0)),
        ("Villa bedroom",       r(260.0, 180.0, 120.0, 120.0)),
        ("Villa bathroom",      r(380.0, 180.0, 60.0, 120.0)),
        ("Apt 103 living room", r(260.0, 320.0, 120.0, 120.0)),
        ("Apt 103 bedroom",     r(380.0, 320.0, 100.0, 100.0)),
        ("Apt 103 kitchen",     r(260.0, 440.0, 100.0, 60.0)),
        ("Main street",         r(490.0, 0.0, 80.0, 700.0)),
        ("Cinema",              r(590.0, 20.0, 260.0, 200.0)),
        ("Restaurant",          r(590.0, 240.0, 260.0, 180.0)),
        ("Public toilet",       r(860.0, 240.0, 40.0, 60.0)),
        ("Bookstore",           r(590.0, 440.0, 160.0, 140.0)),
        ("Gym",                 r(760.0, 440.0, 160.0, 140.0)),
        ("Tech office",         r(960.0, 20.0, 260.0, 200.0)),
        ("Staff dorm",          r(1240.0, 20.0, 140.0, 160.0)),
        ("Design studio",       r(960.0, 240.0, 200.0, 160.0)),
        ("Business center",     r(1180.0, 240.0, 200.0, 160.0)),
        ("Corner store",        r(960.0, 420.0, 160.0, 120.0)),
        ("Park",                r(590.0, 720.0, 560.0, 260.0)),
    ] {
        b.add_room(name, rect);
    }
}

fn homes(b: &mut CatalogBuilder) {
    // Apt 101
    b.add("double bed", Utility::Energy, r(30.0, 30.0, 50.0, 70.0));
    b.add("sofa", Utility::Comfort, r(40.0, 170.0, 70.0, 30.0));
    b.add("TV", Utility::Fun, r(40.0, 230.0, 60.0, 20.0));
    b.add("home computer", Utility::Computer, r(120.0, 170.0, 30.0, 25.0));
    b.add("toilet", Utility::Bladder, r(170.0, 30.0, 20.0, 20.0));
    b.add("shower", Utility::Hygiene, r(205.0, 30.0, 25.0, 30.0));
    b.add("fridge", Utility::Hunger, r(170.0, 130.0, 30.0, 30.0));
    b.add("stove", Utility::Cooking, r(200.0, 170.0, 30.0, 30.0));

    // Apt 102 studio
    b.add("single bed", Utility::Energy, r(30.0, 310.0, 40.0, 60.0));
    b.add("bookshelf", Utility::Fun, r(100.0, 420.0, 60.0, 20.0));
    b.add("toilet", Utility::Bladder, r(190.0, 310.0, 20.0, 20.0));
    b.add("shower", Utility::Hygiene, r(205.0, 350.0, 25.0, 30.0));

    // Villa
    b.add("sofa", Utility::Comfort, r(300.0, 80.0, 90.0, 35.0));
    b.add("home theater", Utility::Fun, r(300.0, 30.0, 80.0, 20.0));
    b.add("piano", Utility::Skill(town_core::Skill::Music), r(400.0, 120.0, 30.0, 40.0));
    b.add("fridge", Utility::Hunger, r(400.0, 30.0, 30.0, 30.0));
    b.add("king bed", Utility::Energy, r(280.0, 200.0, 60.0, 70.0));
    b.add("toilet", Utility::Bladder, r(390.0, 190.0, 20.0, 20.0));
    b.add("bathtub", Utility::Hygiene, r(395.0, 240.0, 35.0, 50.0));

    // Apt 103
    b.add("sofa", Utility::Comfort, r(300.0, 380.0, 60.0, 25.0));
    b.add("game console", Utility::Play, r(280.0, 340.0, 30.0, 20.0));
    b.add("home computer", Utility::Computer, r(420.0, 380.0, 30.0, 25.0));
    b.add("single bed", Utility::Energy, r(400.0, 330.0, 40.0, 60.0));
    b.add("fridge", Utility::Hunger, r(270.0, 450.0, 30.0, 30.0));
    b.add("stove", Utility::Cooking, r(310.0, 450.0, 30.0, 30.0));

    // Staff dorm
    b.add("bunk bed", Utility::Energy, r(1250.0, 30.0, 30.0, 60.0));
    b.add("bunk bed", Utility::Energy, r(1300.0, 30.0, 30.0, 60.0));
    b.add("toilet", Utility::Bladder, r(1340.0, 140.0, 20.0, 20.0));
}

fn downtown(b: &mut CatalogBuilder) {
    // Main street
    b.add("vending machine", Utility::BuyDrink, r(495.0, 100.0, 30.0, 30.0));
    b.add("vending machine", Utility::BuyDrink, r(495.0, 500.0, 30.0, 30.0));
    b.add("street lamp", Utility::Decor, r(540.0, 200.0, 10.0, 10.0));
    b.add("street lamp", Utility::Decor, r(540.0, 400.0, 10.0, 10.0));

    // Cinema
    b.add_priced("IMAX hall", "cinema_imax", r(600.0, 30.0, 120.0, 150.0), 35, true);
    b.add_priced("2D hall", "cinema_2d", r(730.0, 30.0, 110.0, 150.0), 20, true);
    b.add("arcade machine", Utility::Play, r(740.0, 190.0, 30.0, 25.0));
    b.add("arcade machine", Utility::Play, r(780.0, 190.0, 30.0, 25.0));

    // Restaurant
    b.add_priced("restaurant table", Utility::EatOut, r(610.0, 300.0, 40.0, 40.0), 60, false);
    b.add_priced("restaurant table", Utility::EatOut, r(670.0, 300.0, 40.0, 40.0), 60, false);
    b.add_priced("restaurant table", Utility::EatOut, r(730.0, 300.0, 40.0, 40.0), 60, false);
    b.add_shared("restaurant kitchen", Utility::Work, r(780.0, 250.0, 60.0, 40.0));
    b.add("restaurant counter", Utility::Work, r(790.0, 390.0, 40.0, 20.0));
    b.add("public toilet", Utility::Bladder, r(865.0, 250.0, 30.0, 20.0));

    // Bookstore
    b.add("bookstore shelf", Utility::BuyBook, r(600.0, 450.0, 60.0, 30.0));
    b.add("sketch corner", Utility::Art, r(700.0, 520.0, 40.0, 30.0));
    b.add("store counter", Utility::Work, r(680.0, 550.0, 50.0, 20.0));

    // Gym
    b.add("treadmill", Utility::GymRun, r(770.0, 450.0, 40.0, 30.0));
    b.add("treadmill", Utility::GymRun, r(820.0, 450.0, 40.0, 30.0));
    b.add("yoga mat", Utility::GymYoga, r(780.0, 520.0, 50.0, 30.0));
    b.add("dance mat", Utility::Skill(town_core::Skill::Dancing), r(860.0, 520.0, 40.0, 40.0));
    b.add("shower", Utility::Hygiene, r(880.0, 450.0, 25.0, 30.0));

    // Corner store
    b.add("gift counter", Utility::BuyGift, r(980.0, 440.0, 60.0, 30.0));
    b.add("store counter", Utility::Work, r(1060.0, 500.0, 50.0, 20.0));
}

fn offices(b: &mut CatalogBuilder) {
    for i in 0..3 {
        let x = 975.0 + i as f32 * 45.0;
        b.add("dev desk", Utility::Work, r(x, 40.0, 35.0, 25.0));
        b.add("dev desk", Utility::Work, r(x, 100.0, 35.0, 25.0));
    }
    b.add("CTO desk", Utility::Work, r(1150.0, 150.0, 50.0, 40.0));
    b.add("office PC", Utility::Computer, r(1150.0, 40.0, 30.0, 25.0));

    b.add("design desk", Utility::Work, r(980.0, 260.0, 40.0, 30.0));
    b.add("design desk", Utility::Work, r(1030.0, 260.0, 40.0, 30.0));
    b.add("director desk", Utility::Work, r(1100.0, 330.0, 45.0, 35.0));
    b.add("studio easel", Utility::Art, r(990.0, 340.0, 30.0, 40.0));

    b.add("business desk", Utility::Work, r(1190.0, 260.0, 40.0, 30.0));
    b.add("business desk", Utility::Work, r(1240.0, 260.0, 40.0, 30.0));
    b.add("manager desk", Utility::Work, r(1320.0, 330.0, 45.0, 35.0));
}

fn park(b: &mut CatalogBuilder) {
    b.add("park bench", Utility::Comfort, r(650.0, 760.0, 60.0, 20.0));
    b.add("park bench", Utility::Comfort, r(800.0, 760.0, 60.0, 20.0));
    b.add("chess table", Utility::Skill(town_core::Skill::Logic), r(700.0, 820.0, 40.0, 40.0));
    b.add("easel", Utility::Art, r(900.0, 760.0, 30.0, 40.0));
    b.add("swing", Utility::Play, r(1000.0, 760.0, 40.0, 40.0));
    b.add("flower bed", Utility::Gardening, r(620.0, 900.0, 80.0, 40.0));
    b.add("flower bed", Utility::Gardening, r(720.0, 900.0, 80.0, 40.0));
    b.add_shared("lake shore", Utility::Fishing, r(900.0, 850.0, 200.0, 80.0));
    b.add("fountain", Utility::Decor, r(820.0, 850.0, 40.0, 40.0));
}
