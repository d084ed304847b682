use crate::geom::ScreenPoint;

/// Split a polyline into the visible pieces of a dash pattern.
///
/// Pattern entries alternate between drawn and skipped lengths, starting with
/// a drawn one, and the pattern carries across vertices so a dash may bend
/// around a corner. `phase` offsets into the pattern at the first vertex.
/// An empty or zero-length pattern returns the polyline unchanged.
pub fn dash_polyline(points: &[ScreenPoint], pattern: &[f32], phase: f32) -> Vec<Vec<ScreenPoint>> {
    let total: f32 = pattern.iter().sum();
    if points.len() < 2
        || !total.is_finite()
        || total <= 0.0
        || pattern.iter().any(|value| *value < 0.0)
    {
        return vec![points.to_vec()];
    }

    let mut index = 0;
    let mut on = true;
    let mut remaining = pattern[0];
    let mut skip = if phase.is_finite() {
        phase.rem_euclid(total)
    } else {
        0.0
    };
    while skip > 0.0 {
        if skip >= remaining {
            skip -= remaining;
            index = (index + 1) % pattern.len();
            on = !on;
            remaining = pattern[index];
        } else {
            remaining -= skip;
            skip = 0.0;
        }
    }

    let mut out = Vec::new();
    let mut current = if on { vec![points[0]] } else { Vec::new() };

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = start.distance(end);
        let mut travelled = 0.0;
        while length - travelled > remaining {
            travelled += remaining;
            let t = travelled / length;
            let split = ScreenPoint::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            );
            if on {
                current.push(split);
                if current.len() > 1 {
                    out.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            } else {
                current.push(split);
            }
            index = (index + 1) % pattern.len();
            on = !on;
            remaining = pattern[index];
        }
        remaining -= length - travelled;
        if on {
            current.push(end);
        }
    }

    if on && current.len() > 1 {
        out.push(current);
    }
    out
}
