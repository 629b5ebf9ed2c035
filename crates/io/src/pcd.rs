use lidarviz_core::PointCloud;
use std::fs;
use std::io;
use std::path::Path;

/// Reads the x/y/z coordinates of a PCD file (ASCII or binary format).
///
/// Fields other than `x`, `y` and `z` are skipped. Coordinates stored as
/// 8-byte floats are narrowed to `f32`.
pub fn read_pcd(path: impl AsRef<Path>) -> io::Result<PointCloud> {
    let path = path.as_ref();
    let raw = fs::read(path)?;

    let data_offset =
        find_data_line_end(&raw).ok_or_else(|| invalid("PCD file missing DATA line"))?;
    let header_str = std::str::from_utf8(&raw[..data_offset])
        .map_err(|_| invalid("PCD header is not valid UTF-8"))?;
    let header = Header::parse(header_str)?;
    let layout = XyzLayout::locate(&header.fields)?;
    let body = &raw[data_offset..];

    let cloud = match header.format {
        DataFormat::Ascii => read_pcd_ascii(body, &header, &layout)?,
        DataFormat::Binary => read_pcd_binary(body, &header, &layout)?,
    };

    log::debug!(
        "read {} points ({:?}) from {}",
        cloud.len(),
        header.format,
        path.display()
    );
    Ok(cloud)
}

/// Loads a PCD file and returns its coordinate columns.
pub fn extract_xyz(path: impl AsRef<Path>) -> io::Result<(Vec<f32>, Vec<f32>, Vec<f32>)> {
    let cloud = read_pcd(path)?;
    Ok((cloud.x, cloud.y, cloud.z))
}

// --- Internal helpers ---

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DataFormat {
    Ascii,
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    size: usize,
    kind: char,
    count: usize,
}

#[derive(Debug)]
struct Header {
    fields: Vec<Field>,
    points: usize,
    format: DataFormat,
}

impl Header {
    fn parse(text: &str) -> io::Result<Self> {
        let mut names: Vec<String> = Vec::new();
        let mut sizes: Vec<usize> = Vec::new();
        let mut kinds: Vec<char> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        let mut width = None;
        let mut height = None;
        let mut points = None;
        let mut format = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut parts = trimmed.split_whitespace();
            let Some(key) = parts.next() else { continue };
            let values: Vec<&str> = parts.collect();

            match key {
                "FIELDS" => names = values.iter().map(|s| s.to_string()).collect(),
                "SIZE" => sizes = parse_list(key, &values)?,
                "TYPE" => {
                    kinds = values
                        .iter()
                        .map(|s| s.chars().next().unwrap_or('F'))
                        .collect()
                }
                "COUNT" => counts = parse_list(key, &values)?,
                "WIDTH" => width = Some(parse_value(key, &values)?),
                "HEIGHT" => height = Some(parse_value(key, &values)?),
                "POINTS" => points = Some(parse_value(key, &values)?),
                "DATA" => {
                    format = Some(match values.first().copied() {
                        Some("ascii") => DataFormat::Ascii,
                        Some("binary") => DataFormat::Binary,
                        Some(other) => {
                            return Err(io::Error::new(
                                io::ErrorKind::Unsupported,
                                format!("unsupported PCD DATA format: {}", other),
                            ))
                        }
                        None => return Err(invalid("PCD DATA line has no format")),
                    })
                }
                _ => {}
            }
        }

        if names.is_empty() {
            // Default to x y z if no FIELDS line found
            names = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        }
        let n = names.len();
        if sizes.is_empty() {
            sizes = vec![4; n];
        }
        if kinds.is_empty() {
            kinds = vec!['F'; n];
        }
        if counts.is_empty() {
            counts = vec![1; n];
        }
        if sizes.len() != n || kinds.len() != n || counts.len() != n {
            return Err(invalid(format!(
                "PCD header declares {} fields but SIZE/TYPE/COUNT have {}/{}/{} entries",
                n,
                sizes.len(),
                kinds.len(),
                counts.len()
            )));
        }

        let points = match (points, width, height) {
            (Some(p), _, _) => p,
            // Fall back to WIDTH (x HEIGHT) if POINTS is not found
            (None, Some(w), h) => w
                .checked_mul(h.unwrap_or(1))
                .ok_or_else(|| invalid("PCD WIDTH x HEIGHT overflows"))?,
            (None, None, _) => return Err(invalid("PCD file missing POINTS/WIDTH header")),
        };
        let format = format.ok_or_else(|| invalid("PCD file missing DATA line"))?;

        let fields = names
            .into_iter()
            .zip(sizes)
            .zip(kinds)
            .zip(counts)
            .map(|(((name, size), kind), count)| Field {
                name,
                size,
                kind,
                count,
            })
            .collect();

        Ok(Self {
            fields,
            points,
            format,
        })
    }
}

fn parse_value(key: &str, values: &[&str]) -> io::Result<usize> {
    let first = values
        .first()
        .ok_or_else(|| invalid(format!("PCD {} line has no value", key)))?;
    first
        .parse::<usize>()
        .map_err(|e| invalid(format!("invalid {} value: {}", key, e)))
}

fn parse_list(key: &str, values: &[&str]) -> io::Result<Vec<usize>> {
    values
        .iter()
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| invalid(format!("invalid {} value: {}", key, e)))
        })
        .collect()
}

/// Where x, y, z live inside one point record.
#[derive(Debug)]
struct XyzLayout {
    /// Token index of each coordinate in an ASCII line.
    columns: [usize; 3],
    /// Byte offset of each coordinate in a binary record.
    offsets: [usize; 3],
    /// Byte size (4 or 8) of each coordinate.
    sizes: [usize; 3],
    columns_per_point: usize,
    record_size: usize,
}

impl XyzLayout {
    fn locate(fields: &[Field]) -> io::Result<Self> {
        let mut columns = [None; 3];
        let mut offsets = [0; 3];
        let mut sizes = [0; 3];
        let mut column = 0;
        let mut offset = 0;

        for field in fields {
            let axis = match field.name.as_str() {
                "x" => Some(0),
                "y" => Some(1),
                "z" => Some(2),
                _ => None,
            };
            if let Some(axis) = axis {
                if field.kind != 'F' || !(field.size == 4 || field.size == 8) {
                    return Err(io::Error::new(
                        io::ErrorKind::Unsupported,
                        format!(
                            "PCD field {} has type {}{}, expected F4 or F8",
                            field.name, field.kind, field.size
                        ),
                    ));
                }
                columns[axis] = Some(column);
                offsets[axis] = offset;
                sizes[axis] = field.size;
            }
            column = field
                .count
                .checked_add(column)
                .ok_or_else(|| invalid("PCD COUNT total overflows"))?;
            offset = field
                .size
                .checked_mul(field.count)
                .and_then(|bytes| bytes.checked_add(offset))
                .ok_or_else(|| invalid(format!("PCD field {} is too large", field.name)))?;
        }

        match columns {
            [Some(cx), Some(cy), Some(cz)] => Ok(Self {
                columns: [cx, cy, cz],
                offsets,
                sizes,
                columns_per_point: column,
                record_size: offset,
            }),
            _ => Err(invalid("PCD file missing x, y, z fields")),
        }
    }
}

/// Finds the byte offset just past the newline ending the DATA line.
fn find_data_line_end(raw: &[u8]) -> Option<usize> {
    let data_marker = b"DATA";
    for i in 0..raw.len() {
        if (i == 0 || raw[i - 1] == b'\n') && raw[i..].starts_with(data_marker) {
            if let Some(offset) = raw[i..].iter().position(|&b| b == b'\n') {
                return Some(i + offset + 1);
            }
            return Some(raw.len());
        }
    }
    None
}

fn read_pcd_ascii(body: &[u8], header: &Header, layout: &XyzLayout) -> io::Result<PointCloud> {
    let content = std::str::from_utf8(body)
        .map_err(|e| invalid(format!("invalid UTF-8: {}", e)))?;

    // each point needs at least one "d\n" pair per value
    let capacity = header.points.min(body.len() / 2);
    let mut x = Vec::with_capacity(capacity);
    let mut y = Vec::with_capacity(capacity);
    let mut z = Vec::with_capacity(capacity);

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if x.len() == header.points {
            break;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < layout.columns_per_point {
            return Err(invalid(format!(
                "PCD data line {} has {} values, expected {}",
                line_no + 1,
                parts.len(),
                layout.columns_per_point
            )));
        }

        let coord = |axis: usize| -> io::Result<f32> {
            let token = parts[layout.columns[axis]];
            token.parse::<f32>().map_err(|e| {
                invalid(format!(
                    "invalid coordinate {:?} on data line {}: {}",
                    token,
                    line_no + 1,
                    e
                ))
            })
        };

        x.push(coord(0)?);
        y.push(coord(1)?);
        z.push(coord(2)?);
    }

    if x.len() < header.points {
        log::warn!(
            "PCD header declares {} points but only {} were found",
            header.points,
            x.len()
        );
    }

    Ok(PointCloud::from_xyz(x, y, z))
}

fn read_pcd_binary(body: &[u8], header: &Header, layout: &XyzLayout) -> io::Result<PointCloud> {
    let num_points = header.points;
    let expected_size = num_points
        .checked_mul(layout.record_size)
        .ok_or_else(|| invalid(format!("PCD POINTS value {} is too large", num_points)))?;

    if body.len() < expected_size {
        return Err(invalid(format!(
            "binary PCD data too short: have {} bytes, expected {} ({} points x {} bytes)",
            body.len(),
            expected_size,
            num_points,
            layout.record_size
        )));
    }

    let mut x = Vec::with_capacity(num_points);
    let mut y = Vec::with_capacity(num_points);
    let mut z = Vec::with_capacity(num_points);

    if layout.record_size > 0 {
        for record in body[..expected_size].chunks_exact(layout.record_size) {
            let read_at = |axis: usize| -> f32 {
                let start = layout.offsets[axis];
                if layout.sizes[axis] == 8 {
                    let mut bytes = [0u8; 8];
                    bytes.copy_from_slice(&record[start..start + 8]);
                    f64::from_le_bytes(bytes) as f32
                } else {
                    let mut bytes = [0u8; 4];
                    bytes.copy_from_slice(&record[start..start + 4]);
                    f32::from_le_bytes(bytes)
                }
            };

            x.push(read_at(0));
            y.push(read_at(1));
            z.push(read_at(2));
        }
    }

    Ok(PointCloud::from_xyz(x, y, z))
}
