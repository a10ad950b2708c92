use crate::core::labels::type_label;
use crate::core::models::part::PartDescriptor;

/// Outcome of the type-level legality gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Legality {
    Legal,
    /// The joint is structurally impossible; the message names both part
    /// types and the reason.
    Illegal { message: String },
}

/// Checks whether `part_b` may legally be joined onto `part_a`.
///
/// The type check is deliberately one-directional: only `part_a`'s
/// compatible-types list is consulted. It runs before the self-join check,
/// so a part whose own type is missing from its list reports the type error
/// when joined to itself.
pub fn check(part_a: &PartDescriptor, part_b: &PartDescriptor) -> Legality {
    if !part_a.is_compatible_with(part_b.part_type) {
        return Legality::Illegal {
            message: format!(
                "structural error: a {} cannot join a {}",
                type_label(part_a.part_type),
                type_label(part_b.part_type),
            ),
        };
    }

    if part_a.id == part_b.id {
        return Legality::Illegal {
            message: "a part cannot be joined to itself".to_string(),
        };
    }

    Legality::Legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::part::PartType;

    fn frame() -> PartDescriptor {
        let mut part = PartDescriptor::new(1, "main frame", PartType::Frame);
        part.compatible_types = vec![PartType::Panel, PartType::Connector];
        part
    }

    fn panel() -> PartDescriptor {
        let mut part = PartDescriptor::new(2, "triangular panel", PartType::Panel);
        part.compatible_types = vec![PartType::Frame, PartType::Decoration];
        part
    }

    #[test]
    fn compatible_parts_pass_the_gate() {
        assert_eq!(check(&frame(), &panel()), Legality::Legal);
    }

    #[test]
    fn incompatible_type_is_rejected_with_both_labels() {
        let wick = PartDescriptor::new(4, "wick", PartType::Light);
        match check(&frame(), &wick) {
            Legality::Illegal { message } => {
                assert_eq!(message, "structural error: a frame cannot join a wick");
            }
            Legality::Legal => panic!("frame-to-wick must be rejected"),
        }
    }

    #[test]
    fn the_gate_is_one_directional() {
        // The panel accepts frames, but this frame accepts nothing at all:
        // only the left-hand part's list is consulted.
        let mut bare_frame = frame();
        bare_frame.compatible_types.clear();

        assert!(matches!(
            check(&bare_frame, &panel()),
            Legality::Illegal { .. }
        ));
        assert_eq!(check(&panel(), &bare_frame), Legality::Legal);
    }

    #[test]
    fn identical_ids_are_rejected() {
        // Two catalog entries sharing an id, typed so the compatibility
        // check passes and the id check is reached.
        let mut left = frame();
        left.compatible_types = vec![PartType::Frame];
        let mut right = frame();
        right.compatible_types = vec![PartType::Frame];

        match check(&left, &right) {
            Legality::Illegal { message } => {
                assert_eq!(message, "a part cannot be joined to itself");
            }
            Legality::Legal => panic!("self-join must be rejected"),
        }
    }

    #[test]
    fn self_join_of_a_part_not_compatible_with_its_own_type_reports_the_type_error() {
        // The type check runs first, so the message names the types rather
        // than the shared id.
        let part = frame();
        match check(&part, &part.clone()) {
            Legality::Illegal { message } => {
                assert!(message.starts_with("structural error"));
            }
            Legality::Legal => panic!("self-join must be rejected"),
        }
    }
}
