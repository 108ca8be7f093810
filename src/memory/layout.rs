//! Struct and union byte layout
//!
//! Offsets follow the usual C rules: each member starts at the next multiple of its
//! alignment, and the total size is rounded up to the largest member alignment so
//! arrays of the struct stay aligned. A union is as large as its largest member
//! (rounded the same way) and every member sits at offset 0.

use std::fmt;

/// A C type whose size and alignment the lecture shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CType {
    Char,
    Short,
    Int,
    Float,
    Long,
    Double,
    Pointer,
    Array(Box<CType>, usize),
}

impl CType {
    /// `sizeof` the type
    pub fn size(&self) -> usize {
        match self {
            CType::Char => 1,
            CType::Short => 2,
            CType::Int | CType::Float => 4,
            CType::Long | CType::Double | CType::Pointer => 8,
            CType::Array(elem, count) => elem.size() * count,
        }
    }

    /// `_Alignof` the type
    pub fn align(&self) -> usize {
        match self {
            CType::Array(elem, _) => elem.align(),
            scalar => scalar.size(),
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Char => f.write_str("char"),
            CType::Short => f.write_str("short"),
            CType::Int => f.write_str("int"),
            CType::Float => f.write_str("float"),
            CType::Long => f.write_str("long"),
            CType::Double => f.write_str("double"),
            CType::Pointer => f.write_str("void *"),
            CType::Array(elem, count) => write!(f, "{}[{}]", elem, count),
        }
    }
}

/// A member declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: CType,
}

impl Field {
    pub fn new(name: &str, ty: CType) -> Self {
        Field {
            name: name.to_string(),
            ty,
        }
    }
}

/// Where one member landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub ty: CType,
    pub offset: usize,
    pub size: usize,
    /// Padding bytes inserted right before this member
    pub padding_before: usize,
}

/// What one byte of the object is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUse {
    /// Byte of the member with this index
    Field(usize),
    Padding,
}

/// Layout of a struct or union
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub fields: Vec<FieldLayout>,
    pub size: usize,
    pub align: usize,
    /// Padding after the last member
    pub trailing_padding: usize,
}

impl Layout {
    /// Total padding bytes
    pub fn padding(&self) -> usize {
        self.fields.iter().map(|f| f.padding_before).sum::<usize>() + self.trailing_padding
    }

    /// Byte-by-byte map for the layout grid; for unions, the first member covering a
    /// byte wins
    pub fn byte_map(&self) -> Vec<ByteUse> {
        let mut bytes = vec![ByteUse::Padding; self.size];
        for (index, field) in self.fields.iter().enumerate().rev() {
            for byte in &mut bytes[field.offset..field.offset + field.size] {
                *byte = ByteUse::Field(index);
            }
        }
        bytes
    }
}

/// Lay out `fields` as a C struct
pub fn struct_layout(fields: &[Field]) -> Layout {
    let mut offset = 0;
    let mut align = 1;
    let mut placed = Vec::with_capacity(fields.len());

    for field in fields {
        let field_align = field.ty.align();
        align = align.max(field_align);
        let start = round_up(offset, field_align);
        placed.push(FieldLayout {
            name: field.name.clone(),
            ty: field.ty.clone(),
            offset: start,
            size: field.ty.size(),
            padding_before: start - offset,
        });
        offset = start + field.ty.size();
    }

    let size = round_up(offset, align);
    Layout {
        fields: placed,
        size,
        align,
        trailing_padding: size - offset,
    }
}

/// Lay out `fields` as a C union
pub fn union_layout(fields: &[Field]) -> Layout {
    let largest = fields.iter().map(|f| f.ty.size()).max().unwrap_or(0);
    let align = fields.iter().map(|f| f.ty.align()).max().unwrap_or(1);
    let size = round_up(largest, align);

    Layout {
        fields: fields
            .iter()
            .map(|f| FieldLayout {
                name: f.name.clone(),
                ty: f.ty.clone(),
                offset: 0,
                size: f.ty.size(),
                padding_before: 0,
            })
            .collect(),
        size,
        align,
        trailing_padding: size - largest,
    }
}

fn round_up(value: usize, align: usize) -> usize {
    if align <= 1 {
        value
    } else {
        value.div_ceil(align) * align
    }
}
