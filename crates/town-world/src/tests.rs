//! Unit tests for town-world.

#[cfg(test)]
mod helpers {
    use town_core::AgentId;
    use crate::{CatalogBuilder, ObjectCatalog, Rect, Utility};

    /// Three beds on a line at x = 10, 100, 200 (anchors at +10), one of them
    /// reserved by agent 7, plus a shared lake and a piece of decor.
    pub fn line_catalog() -> ObjectCatalog {
        let mut b = CatalogBuilder::new();
        b.add("bed a", Utility::Energy, Rect::new(0.0, 0.0, 20.0, 20.0));
        let reserved = b.add("bed b", Utility::Energy, Rect::new(90.0, 0.0, 20.0, 20.0));
        b.add("bed c", Utility::Energy, Rect::new(190.0, 0.0, 20.0, 20.0));
        b.add_shared("lake", Utility::Fishing, Rect::new(300.0, 0.0, 20.0, 20.0));
        b.add("statue", Utility::Decor, Rect::new(5.0, 5.0, 1.0, 1.0));
        b.reserve(reserved, AgentId(7));
        b.build().unwrap()
    }
}

#[cfg(test)]
mod utility {
    use town_core::{Need, Skill};
    use crate::Utility;

    #[test]
    fn prefixed_tags() {
        assert_eq!(Utility::parse("cinema_imax"), Utility::Cinema("imax".into()));
        assert_eq!(Utility::parse("skill_music"), Utility::Skill(Skill::Music));
        assert_eq!(Utility::parse("skill_juggling"), Utility::Other("skill_juggling".into()));
    }

    #[test]
    fn unknown_tag_is_other() {
        assert_eq!(Utility::parse("med_check"), Utility::Other("med_check".into()));
        assert_eq!(Utility::parse("none"), Utility::Decor);
    }

    #[test]
    fn tag_round_trip() {
        for tag in ["energy", "cinema_2d", "skill_logic", "buy_gift", "work", "weird_thing"] {
            assert_eq!(Utility::parse(tag).tag(), tag);
        }
    }

    #[test]
    fn restores_only_needs() {
        assert_eq!(Utility::Bladder.restores(), Some(Need::Bladder));
        assert_eq!(Utility::Comfort.restores(), None);
        assert!(Utility::BuyBook.is_purchase());
        assert!(!Utility::EatOut.is_purchase());
    }
}

#[cfg(test)]
mod catalog {
    use town_core::{AgentId, ObjectId, Vec2};
    use crate::{CatalogBuilder, Rect, Utility, WorldError};

    #[test]
    fn utility_index() {
        let cat = super::helpers::line_catalog();
        assert_eq!(cat.len(), 5);
        assert_eq!(cat.with_utility(&Utility::Energy).len(), 3);
        assert_eq!(cat.with_utility(&Utility::Fishing), &[ObjectId(3)]);
        assert!(cat.with_utility(&Utility::Art).is_empty());
    }

    #[test]
    fn nearest_matching_is_sorted_and_filtered() {
        let cat = super::helpers::line_catalog();
        let pos = Vec2::new(210.0, 10.0);
        let beds = cat.nearest_matching(pos, 3, |o| o.utility == Utility::Energy);
        assert_eq!(beds, vec![ObjectId(2), ObjectId(1), ObjectId(0)]);

        let free = cat.nearest_matching(pos, 3, |o| {
            o.utility == Utility::Energy && o.reservation_allows(AgentId(1))
        });
        assert_eq!(free, vec![ObjectId(2), ObjectId(0)]);
    }

    #[test]
    fn decor_is_not_indexed_spatially() {
        let cat = super::helpers::line_catalog();
        let all = cat.nearest_matching(Vec2::new(5.0, 5.0), 10, |_| true);
        assert_eq!(all.len(), 4);
        assert!(!all.contains(&ObjectId(4)));
    }

    #[test]
    fn reservation_owner_allowed() {
        let cat = super::helpers::line_catalog();
        let bed = cat.get(ObjectId(1)).unwrap();
        assert!(bed.reservation_allows(AgentId(7)));
        assert!(!bed.reservation_allows(AgentId(8)));
    }

    #[test]
    fn missing_object_is_error() {
        let cat = super::helpers::line_catalog();
        assert!(matches!(cat.object(ObjectId(99)), Err(WorldError::ObjectNotFound(_))));
    }

    #[test]
    fn negative_size_rejected() {
        let mut b = CatalogBuilder::new();
        b.add("bad", Utility::Fun, Rect::new(0.0, 0.0, -1.0, 5.0));
        assert!(matches!(b.build(), Err(WorldError::InvalidRect { .. })));
    }

    #[test]
    fn seats_and_prices() {
        let mut b = CatalogBuilder::new();
        let sofa = b.add("Old Sofa", Utility::Comfort, Rect::new(0.0, 0.0, 10.0, 10.0));
        let imax = b.add_priced("IMAX", "cinema_imax", Rect::new(0.0, 0.0, 10.0, 10.0), 35, true);
        let cat = b.build().unwrap();
        assert!(cat.get(sofa).unwrap().is_seat());
        let imax = cat.get(imax).unwrap();
        assert!(imax.multi_user);
        assert!(imax.affordable(35));
        assert!(!imax.affordable(34));
    }
}

#[cfg(test)]
mod content {
    use town_core::{MapBounds, Vec2};
    use crate::{Utility, default_town};

    #[test]
    fn default_town_has_every_survival_utility() {
        let cat = default_town().unwrap();
        for u in [Utility::Energy, Utility::Hunger, Utility::Bladder, Utility::Hygiene, Utility::Fun] {
            assert!(!cat.with_utility(&u).is_empty(), "missing {u}");
        }
        assert!(!cat.with_utility(&Utility::Fishing).is_empty());
        assert!(!cat.with_utility(&Utility::Computer).is_empty());
        assert!(!cat.with_utility(&Utility::Gardening).is_empty());
    }

    #[test]
    fn desk_counts() {
        let cat = default_town().unwrap();
        assert_eq!(cat.work_objects("dev desk").count(), 6);
        assert_eq!(cat.work_objects("CTO desk").count(), 1);
        assert_eq!(cat.work_objects("design desk").count(), 2);
        assert_eq!(cat.work_objects("store counter").count(), 2);
        assert_eq!(cat.work_objects("kitchen").count(), 1);
    }

    #[test]
    fn every_object_inside_the_map() {
        let cat = default_town().unwrap();
        let bounds = MapBounds::default();
        for o in cat.iter() {
            assert!(bounds.contains(o.anchor()), "{} at {}", o.label, o.anchor());
        }
    }

    #[test]
    fn rooms_resolve() {
        let cat = default_town().unwrap();
        assert_eq!(cat.room_at(Vec2::new(700.0, 100.0)).unwrap().name, "Cinema");
        assert!(cat.room_at(Vec2::new(1390.0, 990.0)).is_none());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use town_core::{AgentId, ObjectId};
    use crate::{Utility, WorldError, load_catalog_reader};

    const CSV: &str = "\
kind,label,utility,x,y,w,h,multi_user,cost,reserved_by
room,Cabin,,0,0,300,200,false,,
object,bunk bed,energy,20,20,30,60,false,,
object,IMAX hall,cinema_imax,100,20,120,150,true,35,
object,old desk,work,200,120,40,30,false,,0
";

    #[test]
    fn loads_rooms_and_objects() {
        let cat = load_catalog_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.rooms().len(), 1);
        let hall = cat.get(ObjectId(1)).unwrap();
        assert_eq!(hall.utility, Utility::Cinema("imax".into()));
        assert_eq!(hall.cost, Some(35));
        assert!(hall.multi_user);
        assert_eq!(cat.get(ObjectId(2)).unwrap().reserved_by, Some(AgentId(0)));
    }

    #[test]
    fn bad_kind_rejected() {
        let csv = "kind,label,utility,x,y,w,h,multi_user,cost,reserved_by\nthing,x,fun,0,0,1,1,false,,\n";
        assert!(matches!(load_catalog_reader(Cursor::new(csv)), Err(WorldError::Parse(_))));
    }
}
