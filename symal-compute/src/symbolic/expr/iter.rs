use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Pending nodes, each paired with whether its operands have already been pushed.
    ///
    /// Operands are tracked per stack entry rather than by comparing against the last visited
    /// node, because trees may share the same operand in several places.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![(expr, false)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            match expr {
                Expr::Constant(_) | Expr::Variable(_) => return Some(expr),
                Expr::Binary(_, lhs, rhs) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**rhs, false));
                    self.stack.push((&**lhs, false));
                },
                Expr::Call(_, operand) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**operand, false));
                },
            }
        }
    }
}
