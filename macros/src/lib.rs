use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with 3 or 4 named channels that all
/// share the same type.
///
/// The channels are made public, the usual derives are added and the model
/// gets a `new` constructor, an `into_array` accessor and a
/// `From<[T; N]>` implementation.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let fields = match input.fields {
        syn::Fields::Named(ref named) => named.named.iter().cloned().collect::<Vec<_>>(),
        _ => {
            return quote! {
                compile_error!("Models must use named fields, one for each channel of the color.")
            }
            .into();
        }
    };

    if !(3..=4).contains(&fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each channel of the color.")
        }
        .into();
    }

    let channel_type = fields[0].ty.clone();
    let channel_type_str = quote!(#channel_type).to_string();
    if fields.iter().any(|f| {
        let ty = &f.ty;
        quote!(#ty).to_string() != channel_type_str
    }) {
        return quote! {
            compile_error!("All channels of a model must have the same type.")
        }
        .into();
    }

    let field_names = fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = field_names.len();

    // Make sure the channels are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        })
        .expect("derive attributes are well formed");
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color from its channels.
            pub const fn new(#(#field_names: #channel_type),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channels of this color in declaration order.
            pub fn into_array(self) -> [#channel_type; #count] {
                [#(self.#field_names),*]
            }
        }

        impl #impl_gen From<[#channel_type; #count]> for #struct_name #type_gen #where_clause {
            fn from([#(#field_names),*]: [#channel_type; #count]) -> Self {
                Self::new(#(#field_names),*)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
