use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a companion columnar `*Series` struct for
/// collecting many values of a record. All fields in the source struct must be `f64`.
///
/// The generated series struct has the same fields as `Vec<f64>`, along with
/// `with_capacity`, `push`, `get`, `len`, `is_empty` and `iter` methods.
/// A `field_names()` associated function and a `to_array()` method are also
/// added to the original struct.
///
/// Use `#[series(name = "CustomName")]` to override the default series
/// struct name (`{StructName}Series`).
#[proc_macro_derive(Series, attributes(series))]
pub fn derive_series(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let series_name =
        extract_series_name(&input).unwrap_or_else(|| format_ident!("{}Series", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Series can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Series can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Series struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_names = Vec::new();
    let mut field_idents = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Series derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        field_names.push(ident.to_string());
        field_idents.push(ident);
    }

    let first_field = &field_idents[0];
    let n_fields = field_idents.len();

    let field_name_strs: Vec<&str> = field_names.iter().map(|s| s.as_str()).collect();

    let series_fields = field_idents.iter().map(|f| {
        quote! { pub #f: Vec<f64> }
    });

    let with_cap_fields = field_idents.iter().map(|f| {
        quote! { #f: Vec::with_capacity(n) }
    });

    let push_fields = field_idents.iter().map(|f| {
        quote! { self.#f.push(record.#f); }
    });

    let get_fields = field_idents.iter().map(|f| {
        quote! { #f: *self.#f.get(i)? }
    });

    let array_fields = field_idents.iter().map(|f| {
        quote! { self.#f }
    });

    let expanded = quote! {
        /// Auto-generated columnar series, one `Vec<f64>` per record field.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #series_name {
            #(#series_fields,)*
        }

        impl #series_name {
            /// Pre-allocate all columns for `n` records.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#with_cap_fields,)*
                }
            }

            /// Append one record.
            pub fn push(&mut self, record: &#name) {
                #(#push_fields)*
            }

            /// Reassemble the record stored at row `i`, if every column has one.
            pub fn get(&self, i: usize) -> Option<#name> {
                Some(#name {
                    #(#get_fields,)*
                })
            }

            /// Iterate over the stored records in insertion order.
            pub fn iter(&self) -> impl Iterator<Item = #name> + '_ {
                (0..self.len()).filter_map(move |i| self.get(i))
            }

            /// Number of records stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no records have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }
        }

        impl ::std::iter::FromIterator<#name> for #series_name {
            fn from_iter<I: IntoIterator<Item = #name>>(iter: I) -> Self {
                let iter = iter.into_iter();
                let mut series = Self::with_capacity(iter.size_hint().0);
                for record in iter {
                    series.push(&record);
                }
                series
            }
        }

        impl #name {
            /// Returns the field names of this record, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }

            /// Returns the field values in `field_names()` order.
            pub fn to_array(&self) -> [f64; #n_fields] {
                [#(#array_fields),*]
            }
        }
    };

    expanded.into()
}

fn extract_series_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("series") {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident("name") {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(format_ident!("{}", lit_str.value()));
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
