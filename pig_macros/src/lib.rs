use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};

/// This macro is added before a state-machine method in an impl block whose
/// type has a `current_phase` field. It first checks if the current phase
/// matches the pattern given in the attribute.
///
/// For example, `#[allowed_phase(TurnPhase::Rolling)]` makes a method first
/// check if the current phase is `TurnPhase::Rolling`, and
/// `#[allowed_phase(MatchPhase::P1Turn | MatchPhase::P2Turn)]` accepts either
/// phase. If not, the method returns `PigError::PhaseViolation`.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase: TokenStream2 = attr.into();
    let operation = ast.sig.ident.to_string();
    let allowed = phase.to_string().replace(" :: ", "::");

    let early_return = quote! {
        if !matches!(self.current_phase, #phase) {
            return Err(crate::PigError::PhaseViolation {
                operation: String::from(#operation),
                allowed: String::from(#allowed),
            });
        }
    };
    let early_return: syn::Stmt = syn::parse2(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
