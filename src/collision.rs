//! Pairwise collision detection and response.
//!
//! Every unordered pair is tested once per tick, `i` ascending then `j > i`
//! ascending, so the resolution order follows list (insertion) order. When
//! three or more bodies overlap at once the result depends on that order.
//!
//! There is no broad phase; a tick costs O(n²), which is fine for the tens of
//! bodies a ballpit holds.

use bevy::prelude::Vec2;
use rand::Rng;

use crate::body::Body;

/// What happened to a single pair during [`resolve_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The circles do not overlap.
    Clear,
    /// Overlapping but already moving apart: separated, no impulse.
    Separating,
    /// Overlapping and approaching: impulse applied and separated.
    Impact,
}

/// Resolve every overlapping pair in `bodies`.
///
/// When `blend_colors` is set, each overlapping pair also takes on a shared
/// blended color drawn with `rng`. Returns the number of overlapping pairs.
pub fn resolve_all(bodies: &mut [Body], rng: &mut impl Rng, blend_colors: bool) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) == Contact::Clear {
                continue;
            }
            contacts += 1;
            if blend_colors {
                let color = a.color.blend(b.color, rng);
                a.color = color;
                b.color = color;
            }
        }
    }
    contacts
}

/// Resolve one pair of circles.
///
/// Applies an impulse along the contact normal when the pair is approaching,
/// using the mean of the two elasticities, then always pushes the pair apart
/// so they just touch. Heavier bodies take a smaller share of both the
/// velocity change and the displacement.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Contact {
    let delta = b.position - a.position;
    let dist = delta.length();
    let reach = a.radius + b.radius;
    if dist >= reach {
        return Contact::Clear;
    }

    // Coincident centers have no direction; split them along +x.
    let normal = if dist > 0.0 { delta / dist } else { Vec2::X };

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;

    let closing = (b.velocity - a.velocity).dot(normal);
    let contact = if closing < 0.0 {
        let e = (a.elasticity + b.elasticity) / 2.0;
        let impulse = -(1.0 + e) * closing / (inv_a + inv_b);
        a.velocity -= normal * impulse * inv_a;
        b.velocity += normal * impulse * inv_b;
        Contact::Impact
    } else {
        Contact::Separating
    };

    let overlap = reach - dist;
    let total = a.mass + b.mass;
    a.position -= normal * overlap * (b.mass / total);
    b.position += normal * overlap * (a.mass / total);

    contact
}
